use bloodbank_core::{BloodType, Donor, Gender, InventoryItem, StockStatus};

#[test]
fn parses_backend_donor_payload() {
    let json = r#"[
      {
        "id": 7,
        "firstName": "Ann",
        "lastName": "Lee",
        "email": "a@x.com",
        "phone": "555-0100",
        "bloodType": "O-",
        "dateOfBirth": "1990-04-01",
        "gender": "Female",
        "city": "Austin",
        "state": "TX",
        "isEligible": true,
        "registrationDate": "2024-06-01"
      }
    ]"#;

    let donors: Vec<Donor> = serde_json::from_str(json).unwrap();
    assert_eq!(donors.len(), 1);
    let d = &donors[0];
    assert_eq!(d.id, Some(7));
    assert_eq!(d.blood_type, BloodType::ONegative);
    assert_eq!(d.gender, Some(Gender::Female));
    assert!(d.is_eligible);
    assert_eq!(d.full_name(), "Ann Lee");
    assert_eq!(d.location(), "Austin, TX");
}

#[test]
fn eligible_alias_and_missing_optionals_are_accepted() {
    let json = r#"{
        "firstName": "Bo",
        "lastName": "Ek",
        "email": "bo@ek.se",
        "bloodType": "AB+",
        "eligible": false
    }"#;

    let d: Donor = serde_json::from_str(json).unwrap();
    assert_eq!(d.id, None);
    assert!(!d.is_eligible);
    assert_eq!(d.phone, "");
    assert_eq!(d.gender, None);
}

#[test]
fn null_text_columns_read_as_empty() {
    let json = r#"[
      {"firstName": "Ann", "lastName": null, "email": null, "phone": null,
       "bloodType": "B-", "dateOfBirth": null, "city": null, "state": "TX", "isEligible": true},
      {"firstName": "Bo", "lastName": "Ek", "email": "bo@ek.se", "bloodType": "O+"}
    ]"#;

    let donors: Vec<Donor> = serde_json::from_str(json).unwrap();
    assert_eq!(donors.len(), 2);
    assert_eq!(donors[0].email, "");
    assert_eq!(donors[0].full_name(), "Ann ");
    assert_eq!(donors[0].location(), ", TX");
    assert_eq!(donors[1].blood_type, BloodType::OPositive);
}

#[test]
fn unknown_blood_type_is_rejected() {
    let json = r#"{"firstName":"X","lastName":"Y","email":"z","bloodType":"C+"}"#;
    assert!(serde_json::from_str::<Donor>(json).is_err());
}

#[test]
fn inventory_payload_and_classification() {
    let json = r#"[
      {"bloodType": "B+", "units": 9},
      {"bloodType": "B+", "units": 19},
      {"bloodType": "B+", "units": 20}
    ]"#;

    let items: Vec<InventoryItem> = serde_json::from_str(json).unwrap();
    let statuses: Vec<_> = items.iter().map(InventoryItem::status).collect();
    assert_eq!(
        statuses,
        vec![StockStatus::Critical, StockStatus::Low, StockStatus::Good]
    );
}

#[test]
fn negative_units_do_not_parse() {
    let json = r#"{"bloodType": "A+", "units": -1}"#;
    assert!(serde_json::from_str::<InventoryItem>(json).is_err());
}
