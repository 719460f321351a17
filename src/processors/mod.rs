pub mod classifier;
pub mod mapper;
pub mod trimmer;

pub use classifier::{ClassifiedMeasurements, FieldClassifier};
pub use mapper::{MailboxChannel, MappedSeries, MissingChannelData, StatisticsMapper};
pub use trimmer::remove_trailing_zeroes;
