pub mod loaders;
pub mod word;

pub use loaders::{parse_unit, UnitFormat, UnitParseError};
pub use word::{CorpusStructure, UnitDocument, UnitMeta, WordEntry};
