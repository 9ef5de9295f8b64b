use rdw_vehicle::domain::mapping::vehicle_from_value;
use rdw_vehicle::{ErrorKind, Vehicle};
use serde_json::Value;

fn first_record(name: &str) -> Value {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    let content = std::fs::read_to_string(path).unwrap();
    let records: Vec<Value> = serde_json::from_str(&content).unwrap();
    records.into_iter().next().unwrap()
}

#[test]
fn test_fixtures_survive_native_round_trip() {
    for name in ["11ZKZ3.json", "0001TJ.json", "VXJ99N.json"] {
        let vehicle = vehicle_from_value(&first_record(name)).unwrap();
        let decoded = Vehicle::from_record(&vehicle.to_record()).unwrap();
        assert_eq!(decoded, vehicle, "fixture {name}");
    }
}

#[test]
fn test_serde_json_round_trip() {
    let vehicle = vehicle_from_value(&first_record("11ZKZ3.json")).unwrap();

    let json = serde_json::to_value(&vehicle).unwrap();
    assert_eq!(json["brand"], "Skoda");
    assert_eq!(json["apk_expiration"], "2022-01-04");
    assert_eq!(json["interior"], "hatchback");

    let decoded: Vehicle = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, vehicle);
}

#[test]
fn test_invalid_month_is_rejected() {
    let mut record = first_record("11ZKZ3.json");
    record["vervaldatum_apk"] = Value::String("20221304".to_string());

    let err = vehicle_from_value(&record).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.to_string().contains("vervaldatum_apk"));
}
