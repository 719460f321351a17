pub mod field;
pub mod point;
pub mod statistic;

pub use field::{KontaktregisterField, KontaktregisterValue, ReportType};
pub use point::{Measurement, TimeSeriesPoint};
pub use statistic::{ClassificationTable, Statistic};
