use super::language::{language_name, LanguageGroup};
use super::model::Voice;
use serde::Serialize;
use std::collections::BTreeMap;

pub type VoicesByLanguage = BTreeMap<String, Vec<Voice>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VoicesByType {
    pub neural: Vec<Voice>,
    pub standard: Vec<Voice>,
}

/// Group voices by language, keeping provider order inside each bucket.
///
/// With an allow-list, each voice lands under the label of the first group
/// accepting its locale and voices no group accepts are dropped. Without one,
/// buckets are keyed by the language name of the locale.
pub fn group_by_language(voices: &[Voice], allow_list: Option<&[LanguageGroup]>) -> VoicesByLanguage {
    let mut grouped = VoicesByLanguage::new();

    for voice in voices {
        let key = match allow_list {
            Some(groups) => match LanguageGroup::for_locale(&voice.locale, groups) {
                Some(group) => group.label().to_string(),
                None => continue,
            },
            None => language_name(&voice.locale),
        };
        grouped.entry(key).or_default().push(voice.clone());
    }

    grouped
}

pub fn partition_by_type(voices: &[Voice]) -> VoicesByType {
    let (neural, standard): (Vec<Voice>, Vec<Voice>) = voices
        .iter()
        .cloned()
        .partition(Voice::is_neural);

    VoicesByType { neural, standard }
}

pub fn group_by_language_and_type(
    voices: &[Voice],
    allow_list: Option<&[LanguageGroup]>,
) -> BTreeMap<String, VoicesByType> {
    group_by_language(voices, allow_list)
        .into_iter()
        .map(|(language, voices)| (language, partition_by_type(&voices)))
        .collect()
}
