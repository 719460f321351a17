use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single named measurement, in the ingest service's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: String,
    pub value: i64,
}

impl Measurement {
    pub fn new(id: impl Into<String>, value: i64) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

/// One reporting hour of mapped statistics.
///
/// Measurements are kept as an ordered list rather than a map: the ingest
/// service takes them as a list, and the output order (primary codes first,
/// then the composites) must be deterministic for a given input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub measurements: Vec<Measurement>,
}

impl TimeSeriesPoint {
    pub fn new(timestamp: DateTime<Utc>, measurements: Vec<Measurement>) -> Self {
        Self {
            timestamp,
            measurements,
        }
    }

    /// Value of the measurement with the given id, if the point carries it.
    pub fn measurement(&self, id: &str) -> Option<i64> {
        self.measurements
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_measurement_lookup() {
        let timestamp = Utc.with_ymd_and_hms(2017, 3, 1, 0, 0, 0).unwrap();
        let point = TimeSeriesPoint::new(
            timestamp,
            vec![
                Measurement::new("aktiveBrukere", 42),
                Measurement::new("brukereMedPostkasse", 7),
            ],
        );

        assert_eq!(point.measurement("aktiveBrukere"), Some(42));
        assert_eq!(point.measurement("brukereMedEpost"), None);
    }

    #[test]
    fn test_serialize_wire_shape() {
        let timestamp = Utc.with_ymd_and_hms(2017, 3, 1, 0, 0, 0).unwrap();
        let point = TimeSeriesPoint::new(timestamp, vec![Measurement::new("aktiveBrukere", 42)]);

        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["timestamp"], "2017-03-01T00:00:00Z");
        assert_eq!(json["measurements"][0]["id"], "aktiveBrukere");
        assert_eq!(json["measurements"][0]["value"], 42);
    }
}
