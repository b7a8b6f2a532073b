pub mod matcher;
pub mod routes;
pub mod samples;
pub mod server;
pub mod translator;

// Re-export main types for convenient access
pub use matcher::{MatchFailure, MatchReport, MatcherConfig, TemplateMatcher};

// Re-export collaborator types used by the server binary and tests
pub use samples::{Sample, SampleStore};
pub use translator::{Translator, TranslatorConfig, TranslatorOutput};
