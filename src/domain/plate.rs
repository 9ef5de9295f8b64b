/// Normalize a license plate the way the RDW stores it: uppercase, no hyphens,
/// no whitespace. `" ab-12-34 "` becomes `"AB1234"`.
pub fn normalize_license_plate(license_plate: &str) -> String {
    license_plate
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}
