use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// RDW dataset identifiers for the Socrata API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    PlatedVehicles,
}

impl Dataset {
    pub fn id(&self) -> &'static str {
        match self {
            Dataset::PlatedVehicles => "m9d7-ebf2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    #[serde(rename = "Aanhangwagen")]
    Trailer,
    #[serde(rename = "Personenauto")]
    PassengerCar,
    #[serde(rename = "Bedrijfsauto")]
    CompanyCar,
    #[serde(rename = "Bus")]
    Bus,
    #[serde(rename = "Motorfiets")]
    Motorcycle,
    #[serde(rename = "Driewielig motorrijtuig")]
    ThreeWheeledMotorVehicle,
    #[serde(rename = "Bromfiets")]
    Moped,
    #[serde(rename = "Middenasaanhangwagen")]
    CenterAxleTrailer,
    #[serde(rename = "Land- of bosbouwtrekker")]
    AgriculturalOrForestryTractor,
    #[serde(rename = "Land- of bosb aanhw of getr uitr stuk")]
    AgriculturalOrForestryTractorTrailer,
}

impl VehicleType {
    pub const ALL: [VehicleType; 10] = [
        VehicleType::Trailer,
        VehicleType::PassengerCar,
        VehicleType::CompanyCar,
        VehicleType::Bus,
        VehicleType::Motorcycle,
        VehicleType::ThreeWheeledMotorVehicle,
        VehicleType::Moped,
        VehicleType::CenterAxleTrailer,
        VehicleType::AgriculturalOrForestryTractor,
        VehicleType::AgriculturalOrForestryTractorTrailer,
    ];

    /// The value as RDW spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Trailer => "Aanhangwagen",
            VehicleType::PassengerCar => "Personenauto",
            VehicleType::CompanyCar => "Bedrijfsauto",
            VehicleType::Bus => "Bus",
            VehicleType::Motorcycle => "Motorfiets",
            VehicleType::ThreeWheeledMotorVehicle => "Driewielig motorrijtuig",
            VehicleType::Moped => "Bromfiets",
            VehicleType::CenterAxleTrailer => "Middenasaanhangwagen",
            VehicleType::AgriculturalOrForestryTractor => "Land- of bosbouwtrekker",
            VehicleType::AgriculturalOrForestryTractorTrailer => {
                "Land- of bosb aanhw of getr uitr stuk"
            }
        }
    }

    pub fn from_source(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleInterior {
    #[serde(rename = "kampeerwagen")]
    Camper,
    #[serde(rename = "caravan")]
    Caravan,
    #[serde(rename = "gesloten opbouw")]
    ClosedInterior,
    #[serde(rename = "cabriolet")]
    Convertible,
    #[serde(rename = "coupe")]
    Coupe,
    #[serde(rename = "brandweerwagen")]
    Firetruck,
    #[serde(rename = "hatchback")]
    Hatchback,
    #[serde(rename = "veewagen")]
    LivestockTruck,
    #[serde(rename = "MPV")]
    Mpv,
    #[serde(rename = "open laadvloer")]
    OpenLoadingFloor,
    #[serde(rename = "open wagen")]
    OpenVehicle,
    #[serde(rename = "sedan")]
    Sedan,
    #[serde(rename = "stationwagen")]
    StationWagon,
    #[serde(rename = "pick-up truck")]
    PickUpTruck,
}

impl VehicleInterior {
    pub const ALL: [VehicleInterior; 14] = [
        VehicleInterior::Camper,
        VehicleInterior::Caravan,
        VehicleInterior::ClosedInterior,
        VehicleInterior::Convertible,
        VehicleInterior::Coupe,
        VehicleInterior::Firetruck,
        VehicleInterior::Hatchback,
        VehicleInterior::LivestockTruck,
        VehicleInterior::Mpv,
        VehicleInterior::OpenLoadingFloor,
        VehicleInterior::OpenVehicle,
        VehicleInterior::Sedan,
        VehicleInterior::StationWagon,
        VehicleInterior::PickUpTruck,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleInterior::Camper => "kampeerwagen",
            VehicleInterior::Caravan => "caravan",
            VehicleInterior::ClosedInterior => "gesloten opbouw",
            VehicleInterior::Convertible => "cabriolet",
            VehicleInterior::Coupe => "coupe",
            VehicleInterior::Firetruck => "brandweerwagen",
            VehicleInterior::Hatchback => "hatchback",
            VehicleInterior::LivestockTruck => "veewagen",
            VehicleInterior::Mpv => "MPV",
            VehicleInterior::OpenLoadingFloor => "open laadvloer",
            VehicleInterior::OpenVehicle => "open wagen",
            VehicleInterior::Sedan => "sedan",
            VehicleInterior::StationWagon => "stationwagen",
            VehicleInterior::PickUpTruck => "pick-up truck",
        }
    }

    pub fn from_source(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleOdometerJudgement {
    #[serde(rename = "Geen oordeel")]
    NoJudgement,
    #[serde(rename = "Logisch")]
    Logical,
    #[serde(rename = "Onlogisch")]
    Illogical,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl VehicleOdometerJudgement {
    pub const ALL: [VehicleOdometerJudgement; 4] = [
        VehicleOdometerJudgement::NoJudgement,
        VehicleOdometerJudgement::Logical,
        VehicleOdometerJudgement::Illogical,
        VehicleOdometerJudgement::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleOdometerJudgement::NoJudgement => "Geen oordeel",
            VehicleOdometerJudgement::Logical => "Logisch",
            VehicleOdometerJudgement::Illogical => "Onlogisch",
            VehicleOdometerJudgement::Unknown => "UNKNOWN",
        }
    }

    pub fn from_source(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }
}

/// A single registered vehicle as known by the RDW.
///
/// Built by [`crate::domain::mapping::vehicle_from_record`]; `license_plate`,
/// `brand` and `model` are always present, everything else may be `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub brand: String,
    pub license_plate: String,
    pub model: String,
    pub apk_expiration: Option<NaiveDate>,
    pub ascription_date: Option<NaiveDate>,
    pub ascription_possible: bool,
    pub energy_label: Option<String>,
    pub engine_capacity: Option<u32>,
    pub exported: bool,
    pub first_admission: Option<NaiveDate>,
    pub interior: Option<VehicleInterior>,
    pub last_odometer_registration_year: Option<u32>,
    pub liability_insured: bool,
    pub list_price: Option<u32>,
    pub mass_driveable: Option<u32>,
    pub mass_empty: Option<u32>,
    pub number_of_cylinders: Option<u32>,
    pub number_of_doors: Option<u32>,
    pub number_of_seats: Option<u32>,
    pub number_of_wheelchair_seats: Option<u32>,
    pub number_of_wheels: Option<u32>,
    pub odometer_judgement: Option<VehicleOdometerJudgement>,
    pub pending_recall: bool,
    pub taxi: bool,
    pub vehicle_type: Option<VehicleType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_id() {
        assert_eq!(Dataset::PlatedVehicles.id(), "m9d7-ebf2");
    }

    #[test]
    fn test_enum_source_lookup() {
        for v in VehicleType::ALL {
            assert_eq!(VehicleType::from_source(v.as_str()), Some(v));
        }
        for v in VehicleInterior::ALL {
            assert_eq!(VehicleInterior::from_source(v.as_str()), Some(v));
        }
        assert_eq!(
            VehicleOdometerJudgement::from_source("Logisch"),
            Some(VehicleOdometerJudgement::Logical)
        );
        // 大小寫敏感
        assert_eq!(VehicleInterior::from_source("Hatchback"), None);
        assert_eq!(VehicleType::from_source("Niet geregistreerd"), None);
    }

    #[test]
    fn test_serde_uses_source_spelling() {
        let json = serde_json::to_string(&VehicleInterior::PickUpTruck).unwrap();
        assert_eq!(json, "\"pick-up truck\"");
        let parsed: VehicleType = serde_json::from_str("\"Personenauto\"").unwrap();
        assert_eq!(parsed, VehicleType::PassengerCar);
    }
}
