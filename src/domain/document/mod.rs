pub mod error;
pub mod extractor;
pub mod language;
pub mod service;

pub use error::DocumentError;
pub use extractor::{extract_text, DocumentKind};
pub use language::suggest_language;
pub use service::{DocumentService, ExtractedDocument};
