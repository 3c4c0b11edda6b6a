pub mod audio_service;
pub mod corpus_service;

pub use audio_service::AudioService;
pub use corpus_service::{CorpusService, WordScope, DEFAULT_BOOK};
