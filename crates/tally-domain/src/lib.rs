//! tally-domain
//!
//! Pure data model for the aggregation engine: raw and normalized transaction
//! records, derived views, diagnostics and date windows.
//! No I/O, no logging, no storage.

pub mod catalog;
pub mod common;
pub mod diagnostics;
pub mod transaction;
pub mod views;
pub mod window;

pub use catalog::*;
pub use common::*;
pub use diagnostics::*;
pub use transaction::*;
pub use views::*;
pub use window::*;
