//! Conversion module - parsing, formatting and the menu's conversion table

pub mod dispatch;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod radix;

pub use dispatch::*;
pub use error::ConvertError;
pub use formatter::format;
pub use parser::{digit_value, parse};
pub use radix::Radix;
