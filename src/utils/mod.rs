pub mod error;
pub mod logger;
pub mod monitor;
pub mod redact;
pub mod validation;
