/// Series id the mapped points are pushed under.
pub const KONTAKTREGISTER_SERIES_ID: &str = "kontaktregister";

/// Mailbox provider labels as they appear in D7 report rows.
pub const DIGIPOST_PROVIDER: &str = "Digipost";
pub const EBOKS_PROVIDER: &str = "e-Boks";

/// Organization numbers keying the D7 provider rows.
pub const DIGIPOST_ORGNR: &str = "984661185";
pub const EBOKS_ORGNR: &str = "996460320";
/// eBoks organization number before the re-registration; rows keyed under it
/// coexist with the current number inside the migration window.
pub const EBOKS_ORGNR_UTGAATT: &str = "958935420";

/// Metric label of the D7 rows carried into the mapping.
pub const D7_METRIC: &str = "Unike brukere";
