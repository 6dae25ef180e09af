pub mod validation;
pub mod vitals;

pub use validation::ValidationError;
pub use vitals::{AnalysisResult, VitalReading};
