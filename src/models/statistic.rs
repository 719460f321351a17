use std::collections::HashMap;
use std::fmt;

use crate::utils::constants::{
    D7_METRIC, DIGIPOST_ORGNR, DIGIPOST_PROVIDER, EBOKS_ORGNR, EBOKS_ORGNR_UTGAATT, EBOKS_PROVIDER,
};

/// Statistic codes known to the mapping: one per matchable report field, plus
/// the two composites that exist only as output keys.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    D5_1,
    D5_2,
    D5_4,
    D5_5,
    D5_6,
    D5_7,
    D7_3,
    D7_4,
    D7_4_OLD,
    D5_5_6,
    D7_3_4,
}

impl Statistic {
    pub const ALL: [Statistic; 11] = [
        Statistic::D5_1,
        Statistic::D5_2,
        Statistic::D5_4,
        Statistic::D5_5,
        Statistic::D5_6,
        Statistic::D5_7,
        Statistic::D7_3,
        Statistic::D7_4,
        Statistic::D7_4_OLD,
        Statistic::D5_5_6,
        Statistic::D7_3_4,
    ];

    /// Codes copied directly into each point, in output order.
    pub const PRIMARY: [Statistic; 8] = [
        Statistic::D5_1,
        Statistic::D5_2,
        Statistic::D5_4,
        Statistic::D5_5,
        Statistic::D5_6,
        Statistic::D5_7,
        Statistic::D7_3,
        Statistic::D7_4,
    ];

    /// Identifier of this statistic in the ingest service.
    pub fn statistic_id(&self) -> &'static str {
        match self {
            Statistic::D5_1 => "aktiveBrukere",
            Statistic::D5_2 => "brukereMedEpost",
            Statistic::D5_4 => "brukereMedMobil",
            Statistic::D5_5 => "reserverteBrukereMedKontaktinfo",
            Statistic::D5_6 => "reserverteBrukereUtenKontaktinfo",
            Statistic::D5_7 => "brukereMedSikkerDigitalPostkasse",
            Statistic::D7_3 => "brukereMedDigipost",
            Statistic::D7_4 => "brukereMedEboks",
            Statistic::D7_4_OLD => "brukereMedEboksUtgaattOrgnr",
            Statistic::D5_5_6 => "brukereMedReservasjon",
            Statistic::D7_3_4 => "brukereMedPostkasse",
        }
    }

    /// Leading tokens of a raw field matching this code, concatenated.
    /// Composites have no raw counterpart.
    pub fn raw_key(&self) -> Option<String> {
        let key = match self {
            Statistic::D5_1 => "D5.1".to_string(),
            Statistic::D5_2 => "D5.2".to_string(),
            Statistic::D5_4 => "D5.4".to_string(),
            Statistic::D5_5 => "D5.5".to_string(),
            Statistic::D5_6 => "D5.6".to_string(),
            Statistic::D5_7 => "D5.7".to_string(),
            Statistic::D7_3 => [DIGIPOST_PROVIDER, DIGIPOST_ORGNR, D7_METRIC].concat(),
            Statistic::D7_4 => [EBOKS_PROVIDER, EBOKS_ORGNR, D7_METRIC].concat(),
            Statistic::D7_4_OLD => [EBOKS_PROVIDER, EBOKS_ORGNR_UTGAATT, D7_METRIC].concat(),
            Statistic::D5_5_6 | Statistic::D7_3_4 => return None,
        };
        Some(key)
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Statistic::D5_1 => "D5.1",
            Statistic::D5_2 => "D5.2",
            Statistic::D5_4 => "D5.4",
            Statistic::D5_5 => "D5.5",
            Statistic::D5_6 => "D5.6",
            Statistic::D5_7 => "D5.7",
            Statistic::D7_3 => "D7.3",
            Statistic::D7_4 => "D7.4",
            Statistic::D7_4_OLD => "D7.4 (utgått orgnr)",
            Statistic::D5_5_6 => "D5.5+D5.6",
            Statistic::D7_3_4 => "D7.3+D7.4",
        };
        f.write_str(label)
    }
}

/// Immutable raw-key lookup for field classification, built once at startup
/// and passed explicitly to the classifier.
#[derive(Debug, Clone)]
pub struct ClassificationTable {
    by_key: HashMap<String, Statistic>,
}

impl ClassificationTable {
    /// The standard Kontaktregister code table.
    pub fn standard() -> Self {
        let by_key = Statistic::ALL
            .iter()
            .filter_map(|s| s.raw_key().map(|key| (key, *s)))
            .collect();
        Self { by_key }
    }

    pub fn find(&self, key: &str) -> Option<Statistic> {
        self.by_key.get(key).copied()
    }
}

impl Default for ClassificationTable {
    fn default() -> Self {
        Self::standard()
    }
}
