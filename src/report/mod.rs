//! Report module - rendering conversion results

pub mod export;
pub mod table;

pub use export::*;
pub use table::*;
