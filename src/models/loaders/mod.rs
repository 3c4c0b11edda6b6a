pub mod unit_loader;

pub use unit_loader::{parse_unit, UnitFormat, UnitParseError};
