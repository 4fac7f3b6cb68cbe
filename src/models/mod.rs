pub mod method;
pub mod options;
pub mod outcome;

pub use method::ThresholdMethod;
pub use options::{DisplayBounds, ThresholdOptions};
pub use outcome::ThresholdOutcome;
