pub mod classifier;

pub use crate::domain::model::{Assessment, Label, Package};
pub use crate::domain::ports::ThresholdProvider;
pub use crate::utils::error::Result;
