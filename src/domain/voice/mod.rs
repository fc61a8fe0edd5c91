pub mod catalog;
pub mod grouping;
pub mod language;
pub mod model;

pub use catalog::VoiceCatalog;
pub use grouping::{
    group_by_language, group_by_language_and_type, partition_by_type, VoicesByLanguage,
    VoicesByType,
};
pub use language::{language_name, LanguageGroup, DEFAULT_LANGUAGE_GROUPS};
pub use model::{Voice, VoiceType};
