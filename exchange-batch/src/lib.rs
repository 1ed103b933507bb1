//! # Exchange Batch
//!
//! Application layer of the exchange pipeline.
//!
//! ## Architecture
//!
//! - `validator` - turns one raw line into a typed request or a categorized error
//! - `engine` - walks a batch file line by line, isolating failures per line
//! - `exchange` - single conversions outside of a batch
//! - `export` - appends single conversions to a dated CSV file
//! - `gold` - latest gold price against the best price in a range
//!
//! The engine and the single exchange service are generic over
//! `P: RateProvider`, the gold service over `P: GoldPriceProvider`, so any
//! price source can be injected.

pub mod engine;
pub mod exchange;
pub mod export;
pub mod gold;
pub mod validator;


pub use engine::BatchIngestionEngine;
pub use exchange::SingleExchangeService;
pub use export::{ExportError, ResultExporter};
pub use gold::GoldService;
pub use validator::BatchRecordValidator;
