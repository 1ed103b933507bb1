//! Domain models for the exchange pipeline.

pub mod outcome;
pub mod request;

pub use outcome::BatchOutcome;
pub use request::{ExchangeRequest, RawRecord};
