pub mod annotator;
pub mod config;
pub mod error;

pub use annotator::{Annotator, LineOutcome, LineReport};
pub use config::Config;
pub use error::{LineError, SkipReason};
