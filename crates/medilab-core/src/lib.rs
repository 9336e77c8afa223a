pub mod config;
pub mod counter;
pub mod error;
pub mod validation;

pub use config::{AppConfig, CounterConfig, EasingType, ValidationConfig};
pub use error::{Error, Result};
