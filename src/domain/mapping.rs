//! Mapping between RDW records (Dutch keys, everything as strings) and [`Vehicle`].
//!
//! Every field is described once in [`VEHICLE_FIELDS`]. Per field the mapper
//! runs: sentinel substitution, trim/title case, coercion, assignment.

use crate::domain::model::{Vehicle, VehicleInterior, VehicleOdometerJudgement, VehicleType};
use crate::utils::error::{RdwError, Result};
use chrono::{Datelike, NaiveDate};
use serde_json::{Map, Value};

pub const NOT_REGISTERED: &str = "Niet geregistreerd";
pub const NOT_APPLICABLE: &str = "N.v.t.";

const TRUE_STRING: &str = "Ja";
const FALSE_STRING: &str = "Nee";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Brand,
    LicensePlate,
    Model,
    ApkExpiration,
    AscriptionDate,
    AscriptionPossible,
    EnergyLabel,
    EngineCapacity,
    Exported,
    FirstAdmission,
    Interior,
    LastOdometerRegistrationYear,
    LiabilityInsured,
    ListPrice,
    MassDriveable,
    MassEmpty,
    NumberOfCylinders,
    NumberOfDoors,
    NumberOfSeats,
    NumberOfWheelchairSeats,
    NumberOfWheels,
    OdometerJudgement,
    PendingRecall,
    Taxi,
    VehicleType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Text,
    /// Trimmed and title cased, e.g. `" SKODA "` -> `"Skoda"`.
    TitleText,
    Integer,
    /// `YYYYMMDD`
    Date,
    /// `"Ja"` is true, anything else (absent included) is false.
    DutchBool,
    VehicleType,
    Interior,
    OdometerJudgement,
}

impl Transform {
    fn is_enumeration(&self) -> bool {
        matches!(
            self,
            Transform::VehicleType | Transform::Interior | Transform::OdometerJudgement
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub source: &'static str,
    pub field: Field,
    pub transform: Transform,
    pub required: bool,
}

const fn required(source: &'static str, field: Field, transform: Transform) -> FieldMapping {
    FieldMapping {
        source,
        field,
        transform,
        required: true,
    }
}

const fn optional(source: &'static str, field: Field, transform: Transform) -> FieldMapping {
    FieldMapping {
        source,
        field,
        transform,
        required: false,
    }
}

pub static VEHICLE_FIELDS: [FieldMapping; 25] = [
    required("merk", Field::Brand, Transform::TitleText),
    required("kenteken", Field::LicensePlate, Transform::Text),
    required("handelsbenaming", Field::Model, Transform::TitleText),
    optional("vervaldatum_apk", Field::ApkExpiration, Transform::Date),
    optional("datum_tenaamstelling", Field::AscriptionDate, Transform::Date),
    optional("tenaamstellen_mogelijk", Field::AscriptionPossible, Transform::DutchBool),
    optional("zuinigheidslabel", Field::EnergyLabel, Transform::Text),
    optional("cilinderinhoud", Field::EngineCapacity, Transform::Integer),
    optional("export_indicator", Field::Exported, Transform::DutchBool),
    optional("datum_eerste_toelating", Field::FirstAdmission, Transform::Date),
    optional("inrichting", Field::Interior, Transform::Interior),
    optional(
        "jaar_laatste_registratie_tellerstand",
        Field::LastOdometerRegistrationYear,
        Transform::Integer,
    ),
    optional("wam_verzekerd", Field::LiabilityInsured, Transform::DutchBool),
    optional("catalogusprijs", Field::ListPrice, Transform::Integer),
    optional("massa_rijklaar", Field::MassDriveable, Transform::Integer),
    optional("massa_ledig_voertuig", Field::MassEmpty, Transform::Integer),
    optional("aantal_cilinders", Field::NumberOfCylinders, Transform::Integer),
    optional("aantal_deuren", Field::NumberOfDoors, Transform::Integer),
    optional("aantal_zitplaatsen", Field::NumberOfSeats, Transform::Integer),
    optional(
        "aantal_rolstoelplaatsen",
        Field::NumberOfWheelchairSeats,
        Transform::Integer,
    ),
    optional("aantal_wielen", Field::NumberOfWheels, Transform::Integer),
    optional(
        "tellerstandoordeel",
        Field::OdometerJudgement,
        Transform::OdometerJudgement,
    ),
    optional(
        "openstaande_terugroepactie_indicator",
        Field::PendingRecall,
        Transform::DutchBool,
    ),
    optional("taxi_indicator", Field::Taxi, Transform::DutchBool),
    optional("voertuigsoort", Field::VehicleType, Transform::VehicleType),
];

#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    Text(String),
    Integer(u32),
    Date(NaiveDate),
    Bool(bool),
    VehicleType(VehicleType),
    Interior(VehicleInterior),
    OdometerJudgement(VehicleOdometerJudgement),
}

/// Map the first element of an API response (any JSON value) to a vehicle.
pub fn vehicle_from_value(value: &Value) -> Result<Vehicle> {
    let record = value
        .as_object()
        .ok_or_else(|| RdwError::parse("record", "expected a JSON object"))?;
    vehicle_from_record(record)
}

pub fn vehicle_from_record(record: &Map<String, Value>) -> Result<Vehicle> {
    let mut draft = VehicleDraft::default();

    for mapping in VEHICLE_FIELDS.iter() {
        let raw = preprocess(mapping.transform, record.get(mapping.source));
        let value = coerce(mapping, raw)?;

        match value {
            Some(value) => draft.assign(mapping, value)?,
            None if mapping.required => {
                return Err(RdwError::parse(mapping.source, "missing required field"));
            }
            None => {}
        }
    }

    draft.build()
}

/// The inverse of [`vehicle_from_record`]: the record as the RDW API would send it.
/// Absent optional fields are left out.
pub fn vehicle_to_record(vehicle: &Vehicle) -> Map<String, Value> {
    let mut record = Map::new();
    for mapping in VEHICLE_FIELDS.iter() {
        if let Some(value) = field_value(vehicle, mapping.field) {
            record.insert(mapping.source.to_string(), encode(value));
        }
    }
    record
}

impl Vehicle {
    pub fn from_record(record: &Map<String, Value>) -> Result<Self> {
        vehicle_from_record(record)
    }

    pub fn to_record(&self) -> Map<String, Value> {
        vehicle_to_record(self)
    }
}

/// Python-style title case: a letter is uppercased when it follows a non-letter.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for c in value.chars() {
        if previous_is_letter {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }

    result
}

/// Parse the RDW `YYYYMMDD` date format. Anything else, including impossible
/// dates such as month 13, is an error.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RdwError::parse(
            field,
            format!("expected a date formatted as YYYYMMDD, got {:?}", value),
        ));
    }

    // 已確認是 8 位 ASCII 數字，切片不會失敗
    let year: i32 = value[0..4].parse().map_err(|_| invalid_date(field, value))?;
    let month: u32 = value[4..6].parse().map_err(|_| invalid_date(field, value))?;
    let day: u32 = value[6..8].parse().map_err(|_| invalid_date(field, value))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid_date(field, value))
}

fn invalid_date(field: &str, value: &str) -> RdwError {
    RdwError::parse(field, format!("{:?} is not a valid calendar date", value))
}

pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

fn is_sentinel(value: &str) -> bool {
    value == NOT_REGISTERED || value == NOT_APPLICABLE
}

/// Sentinel substitution and text normalization; JSON `null` counts as absent.
fn preprocess(transform: Transform, raw: Option<&Value>) -> Option<Value> {
    match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if transform.is_enumeration() && is_sentinel(s) => None,
        Some(Value::String(s)) if transform == Transform::TitleText => {
            Some(Value::String(title_case(s.trim())))
        }
        Some(other) => Some(other.clone()),
    }
}

fn coerce(mapping: &FieldMapping, raw: Option<Value>) -> Result<Option<FieldValue>> {
    let Some(raw) = raw else {
        // 布林欄位缺值時視為 "Nee"
        return Ok((mapping.transform == Transform::DutchBool).then_some(FieldValue::Bool(false)));
    };

    let value = match mapping.transform {
        Transform::Text | Transform::TitleText => {
            FieldValue::Text(expect_str(mapping, &raw)?.to_string())
        }
        Transform::Integer => FieldValue::Integer(parse_integer(mapping.source, &raw)?),
        Transform::Date => {
            FieldValue::Date(parse_date(mapping.source, expect_str(mapping, &raw)?)?)
        }
        Transform::VehicleType => {
            let s = expect_str(mapping, &raw)?;
            FieldValue::VehicleType(
                VehicleType::from_source(s).ok_or_else(|| unknown_variant(mapping, s))?,
            )
        }
        Transform::Interior => {
            let s = expect_str(mapping, &raw)?;
            FieldValue::Interior(
                VehicleInterior::from_source(s).ok_or_else(|| unknown_variant(mapping, s))?,
            )
        }
        Transform::OdometerJudgement => {
            let s = expect_str(mapping, &raw)?;
            FieldValue::OdometerJudgement(
                VehicleOdometerJudgement::from_source(s)
                    .ok_or_else(|| unknown_variant(mapping, s))?,
            )
        }
        Transform::DutchBool => FieldValue::Bool(raw.as_str() == Some(TRUE_STRING)),
    };

    Ok(Some(value))
}

fn expect_str<'a>(mapping: &FieldMapping, raw: &'a Value) -> Result<&'a str> {
    raw.as_str()
        .ok_or_else(|| RdwError::parse(mapping.source, format!("expected a string, got {}", raw)))
}

fn unknown_variant(mapping: &FieldMapping, value: &str) -> RdwError {
    RdwError::parse(mapping.source, format!("unknown value {:?}", value))
}

/// The API sends numbers as strings; plain JSON numbers are accepted too.
fn parse_integer(field: &str, raw: &Value) -> Result<u32> {
    let parsed = match raw {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| RdwError::parse(field, format!("expected an integer, got {}", raw)))
}

fn encode(value: FieldValue) -> Value {
    match value {
        FieldValue::Text(s) => Value::String(s),
        FieldValue::Integer(n) => Value::String(n.to_string()),
        FieldValue::Date(d) => Value::String(format_date(d)),
        FieldValue::Bool(b) => Value::String(if b { TRUE_STRING } else { FALSE_STRING }.to_string()),
        FieldValue::VehicleType(v) => Value::String(v.as_str().to_string()),
        FieldValue::Interior(v) => Value::String(v.as_str().to_string()),
        FieldValue::OdometerJudgement(v) => Value::String(v.as_str().to_string()),
    }
}

fn field_value(vehicle: &Vehicle, field: Field) -> Option<FieldValue> {
    let text = |s: &String| Some(FieldValue::Text(s.clone()));
    match field {
        Field::Brand => text(&vehicle.brand),
        Field::LicensePlate => text(&vehicle.license_plate),
        Field::Model => text(&vehicle.model),
        Field::ApkExpiration => vehicle.apk_expiration.map(FieldValue::Date),
        Field::AscriptionDate => vehicle.ascription_date.map(FieldValue::Date),
        Field::AscriptionPossible => Some(FieldValue::Bool(vehicle.ascription_possible)),
        Field::EnergyLabel => vehicle.energy_label.clone().map(FieldValue::Text),
        Field::EngineCapacity => vehicle.engine_capacity.map(FieldValue::Integer),
        Field::Exported => Some(FieldValue::Bool(vehicle.exported)),
        Field::FirstAdmission => vehicle.first_admission.map(FieldValue::Date),
        Field::Interior => vehicle.interior.map(FieldValue::Interior),
        Field::LastOdometerRegistrationYear => vehicle
            .last_odometer_registration_year
            .map(FieldValue::Integer),
        Field::LiabilityInsured => Some(FieldValue::Bool(vehicle.liability_insured)),
        Field::ListPrice => vehicle.list_price.map(FieldValue::Integer),
        Field::MassDriveable => vehicle.mass_driveable.map(FieldValue::Integer),
        Field::MassEmpty => vehicle.mass_empty.map(FieldValue::Integer),
        Field::NumberOfCylinders => vehicle.number_of_cylinders.map(FieldValue::Integer),
        Field::NumberOfDoors => vehicle.number_of_doors.map(FieldValue::Integer),
        Field::NumberOfSeats => vehicle.number_of_seats.map(FieldValue::Integer),
        Field::NumberOfWheelchairSeats => {
            vehicle.number_of_wheelchair_seats.map(FieldValue::Integer)
        }
        Field::NumberOfWheels => vehicle.number_of_wheels.map(FieldValue::Integer),
        Field::OdometerJudgement => vehicle.odometer_judgement.map(FieldValue::OdometerJudgement),
        Field::PendingRecall => Some(FieldValue::Bool(vehicle.pending_recall)),
        Field::Taxi => Some(FieldValue::Bool(vehicle.taxi)),
        Field::VehicleType => vehicle.vehicle_type.map(FieldValue::VehicleType),
    }
}

/// 逐欄收集，最後一次建構 Vehicle
#[derive(Debug, Default)]
struct VehicleDraft {
    brand: Option<String>,
    license_plate: Option<String>,
    model: Option<String>,
    apk_expiration: Option<NaiveDate>,
    ascription_date: Option<NaiveDate>,
    ascription_possible: bool,
    energy_label: Option<String>,
    engine_capacity: Option<u32>,
    exported: bool,
    first_admission: Option<NaiveDate>,
    interior: Option<VehicleInterior>,
    last_odometer_registration_year: Option<u32>,
    liability_insured: bool,
    list_price: Option<u32>,
    mass_driveable: Option<u32>,
    mass_empty: Option<u32>,
    number_of_cylinders: Option<u32>,
    number_of_doors: Option<u32>,
    number_of_seats: Option<u32>,
    number_of_wheelchair_seats: Option<u32>,
    number_of_wheels: Option<u32>,
    odometer_judgement: Option<VehicleOdometerJudgement>,
    pending_recall: bool,
    taxi: bool,
    vehicle_type: Option<VehicleType>,
}

impl VehicleDraft {
    fn assign(&mut self, mapping: &FieldMapping, value: FieldValue) -> Result<()> {
        use FieldValue as V;

        match (mapping.field, value) {
            (Field::Brand, V::Text(s)) => self.brand = Some(s),
            (Field::LicensePlate, V::Text(s)) => self.license_plate = Some(s),
            (Field::Model, V::Text(s)) => self.model = Some(s),
            (Field::ApkExpiration, V::Date(d)) => self.apk_expiration = Some(d),
            (Field::AscriptionDate, V::Date(d)) => self.ascription_date = Some(d),
            (Field::AscriptionPossible, V::Bool(b)) => self.ascription_possible = b,
            (Field::EnergyLabel, V::Text(s)) => self.energy_label = Some(s),
            (Field::EngineCapacity, V::Integer(n)) => self.engine_capacity = Some(n),
            (Field::Exported, V::Bool(b)) => self.exported = b,
            (Field::FirstAdmission, V::Date(d)) => self.first_admission = Some(d),
            (Field::Interior, V::Interior(i)) => self.interior = Some(i),
            (Field::LastOdometerRegistrationYear, V::Integer(n)) => {
                self.last_odometer_registration_year = Some(n)
            }
            (Field::LiabilityInsured, V::Bool(b)) => self.liability_insured = b,
            (Field::ListPrice, V::Integer(n)) => self.list_price = Some(n),
            (Field::MassDriveable, V::Integer(n)) => self.mass_driveable = Some(n),
            (Field::MassEmpty, V::Integer(n)) => self.mass_empty = Some(n),
            (Field::NumberOfCylinders, V::Integer(n)) => self.number_of_cylinders = Some(n),
            (Field::NumberOfDoors, V::Integer(n)) => self.number_of_doors = Some(n),
            (Field::NumberOfSeats, V::Integer(n)) => self.number_of_seats = Some(n),
            (Field::NumberOfWheelchairSeats, V::Integer(n)) => {
                self.number_of_wheelchair_seats = Some(n)
            }
            (Field::NumberOfWheels, V::Integer(n)) => self.number_of_wheels = Some(n),
            (Field::OdometerJudgement, V::OdometerJudgement(j)) => {
                self.odometer_judgement = Some(j)
            }
            (Field::PendingRecall, V::Bool(b)) => self.pending_recall = b,
            (Field::Taxi, V::Bool(b)) => self.taxi = b,
            (Field::VehicleType, V::VehicleType(t)) => self.vehicle_type = Some(t),
            (field, value) => {
                return Err(RdwError::parse(
                    mapping.source,
                    format!("transform produced {:?} for field {:?}", value, field),
                ));
            }
        }

        Ok(())
    }

    fn build(self) -> Result<Vehicle> {
        Ok(Vehicle {
            brand: self.brand.ok_or_else(|| RdwError::parse("merk", "missing required field"))?,
            license_plate: self
                .license_plate
                .ok_or_else(|| RdwError::parse("kenteken", "missing required field"))?,
            model: self
                .model
                .ok_or_else(|| RdwError::parse("handelsbenaming", "missing required field"))?,
            apk_expiration: self.apk_expiration,
            ascription_date: self.ascription_date,
            ascription_possible: self.ascription_possible,
            energy_label: self.energy_label,
            engine_capacity: self.engine_capacity,
            exported: self.exported,
            first_admission: self.first_admission,
            interior: self.interior,
            last_odometer_registration_year: self.last_odometer_registration_year,
            liability_insured: self.liability_insured,
            list_price: self.list_price,
            mass_driveable: self.mass_driveable,
            mass_empty: self.mass_empty,
            number_of_cylinders: self.number_of_cylinders,
            number_of_doors: self.number_of_doors,
            number_of_seats: self.number_of_seats,
            number_of_wheelchair_seats: self.number_of_wheelchair_seats,
            number_of_wheels: self.number_of_wheels,
            odometer_judgement: self.odometer_judgement,
            pending_recall: self.pending_recall,
            taxi: self.taxi,
            vehicle_type: self.vehicle_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;
    use serde_json::json;

    fn minimal() -> Map<String, Value> {
        json!({
            "kenteken": "11ZKZ3",
            "merk": "SKODA",
            "handelsbenaming": "CITIGO",
        })
        .as_object()
        .unwrap()
        .clone()
    }

    fn with(key: &str, value: Value) -> Map<String, Value> {
        let mut record = minimal();
        record.insert(key.to_string(), value);
        record
    }

    #[test]
    fn test_table_covers_every_field_once() {
        let mut sources: Vec<&str> = VEHICLE_FIELDS.iter().map(|m| m.source).collect();
        sources.sort_unstable();
        sources.dedup();
        assert_eq!(sources.len(), VEHICLE_FIELDS.len());

        let required: Vec<&str> = VEHICLE_FIELDS
            .iter()
            .filter(|m| m.required)
            .map(|m| m.source)
            .collect();
        assert_eq!(required, vec!["merk", "kenteken", "handelsbenaming"]);
    }

    #[test]
    fn test_minimal_record() {
        let vehicle = vehicle_from_record(&minimal()).unwrap();
        assert_eq!(vehicle.brand, "Skoda");
        assert_eq!(vehicle.model, "Citigo");
        assert_eq!(vehicle.license_plate, "11ZKZ3");
        assert_eq!(vehicle.apk_expiration, None);
        assert_eq!(vehicle.interior, None);
        assert!(!vehicle.taxi);
        assert!(!vehicle.exported);
    }

    #[test]
    fn test_missing_required_field() {
        let mut record = minimal();
        record.remove("merk");
        let err = vehicle_from_record(&record).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("merk"));

        let err = vehicle_from_value(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("SKODA"), "Skoda");
        assert_eq!(title_case("MERCEDES-BENZ"), "Mercedes-Benz");
        assert_eq!(title_case("golf variant"), "Golf Variant");
        assert_eq!(title_case("4x4"), "4X4");
        assert_eq!(title_case(""), "");

        let vehicle = vehicle_from_record(&with("merk", json!("  VOLKSWAGEN  "))).unwrap();
        assert_eq!(vehicle.brand, "Volkswagen");
    }

    #[test]
    fn test_dates() {
        let vehicle = vehicle_from_record(&with("vervaldatum_apk", json!("20220104"))).unwrap();
        assert_eq!(vehicle.apk_expiration, NaiveDate::from_ymd_opt(2022, 1, 4));

        for bad in ["2022-01-04", "2022014", "202201045", "20221304", "20220230", "abcdefgh"] {
            let err = vehicle_from_record(&with("vervaldatum_apk", json!(bad))).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "{bad} should not parse");
        }

        let err = vehicle_from_record(&with("datum_tenaamstelling", json!(20220104))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_dutch_booleans() {
        let vehicle = vehicle_from_record(&with("taxi_indicator", json!("Ja"))).unwrap();
        assert!(vehicle.taxi);

        for other in [json!("Nee"), json!("ja"), json!(""), json!(true), Value::Null] {
            let vehicle = vehicle_from_record(&with("taxi_indicator", other)).unwrap();
            assert!(!vehicle.taxi);
        }
    }

    #[test]
    fn test_enumerations_and_sentinels() {
        let vehicle = vehicle_from_record(&with("inrichting", json!("hatchback"))).unwrap();
        assert_eq!(vehicle.interior, Some(VehicleInterior::Hatchback));

        for sentinel in [NOT_REGISTERED, NOT_APPLICABLE] {
            let vehicle = vehicle_from_record(&with("tellerstandoordeel", json!(sentinel))).unwrap();
            assert_eq!(vehicle.odometer_judgement, None);
            let vehicle = vehicle_from_record(&with("voertuigsoort", json!(sentinel))).unwrap();
            assert_eq!(vehicle.vehicle_type, None);
        }

        let vehicle = vehicle_from_record(&with("tellerstandoordeel", json!("UNKNOWN"))).unwrap();
        assert_eq!(
            vehicle.odometer_judgement,
            Some(VehicleOdometerJudgement::Unknown)
        );

        let err = vehicle_from_record(&with("voertuigsoort", json!("Ruimteschip"))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("voertuigsoort"));
    }

    #[test]
    fn test_sentinel_is_only_substituted_for_enumerations() {
        let vehicle = vehicle_from_record(&with("zuinigheidslabel", json!(NOT_APPLICABLE))).unwrap();
        assert_eq!(vehicle.energy_label.as_deref(), Some(NOT_APPLICABLE));
    }

    #[test]
    fn test_integers() {
        let vehicle = vehicle_from_record(&with("cilinderinhoud", json!("999"))).unwrap();
        assert_eq!(vehicle.engine_capacity, Some(999));
        let vehicle = vehicle_from_record(&with("aantal_deuren", json!(4))).unwrap();
        assert_eq!(vehicle.number_of_doors, Some(4));

        for bad in [json!("9.5"), json!("-1"), json!(-1), json!([1])] {
            let err = vehicle_from_record(&with("cilinderinhoud", bad)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse);
        }
    }

    #[test]
    fn test_record_round_trip() {
        let record = json!({
            "kenteken": "11ZKZ3",
            "merk": "SKODA",
            "handelsbenaming": "CITIGO",
            "vervaldatum_apk": "20220104",
            "datum_eerste_toelating": "20130104",
            "cilinderinhoud": "999",
            "inrichting": "hatchback",
            "voertuigsoort": "Personenauto",
            "tellerstandoordeel": "Logisch",
            "wam_verzekerd": "Ja",
            "taxi_indicator": "Nee",
        });
        let vehicle = vehicle_from_value(&record).unwrap();

        let encoded = vehicle.to_record();
        assert_eq!(encoded["merk"], json!("Skoda"));
        assert_eq!(encoded["vervaldatum_apk"], json!("20220104"));
        assert_eq!(encoded["wam_verzekerd"], json!("Ja"));
        assert_eq!(encoded["export_indicator"], json!("Nee"));
        assert!(!encoded.contains_key("catalogusprijs"));

        assert_eq!(Vehicle::from_record(&encoded).unwrap(), vehicle);
    }
}
