use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{NUM_OPTIONS, QuizItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ta,
    Hi,
}

impl Language {
    pub const DEFAULT: Language = Language::En;
    pub const ALL: [Language; 3] = [Language::En, Language::Ta, Language::Hi];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ta => "ta",
            Language::Hi => "hi",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ta => "தமிழ்",
            Language::Hi => "हिन्दी",
        }
    }

    /// The next language in the selector cycle.
    pub fn next(&self) -> Language {
        match self {
            Language::En => Language::Ta,
            Language::Ta => Language::Hi,
            Language::Hi => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code: {0} (expected en, ta or hi)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

/// Display text for one item in one language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedText<'a> {
    pub prompt: &'a str,
    pub options: &'a [String; NUM_OPTIONS],
}

/// Resolve the prompt and options to show for `item` in `language`.
///
/// Falls back to the item's default-language text when no override exists.
pub fn resolve(item: &QuizItem, language: Language) -> ResolvedText<'_> {
    if language != Language::DEFAULT {
        if let Some(text) = item.localized.get(language.code()) {
            return ResolvedText {
                prompt: &text.prompt,
                options: &text.options,
            };
        }
    }

    ResolvedText {
        prompt: &item.prompt,
        options: &item.options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::demo;
    use crate::models::LocalizedText;
    use proptest::prelude::*;

    fn item_with_tamil_only() -> QuizItem {
        let mut item = demo::questions().remove(0);
        item.localized.clear();
        item.localized.insert(
            "ta".to_string(),
            LocalizedText {
                prompt: "2 + 2 என்ன?".to_string(),
                options: ["3", "4", "5", "6"].map(String::from),
            },
        );
        item
    }

    #[test]
    fn default_language_ignores_overrides() {
        let mut item = item_with_tamil_only();
        item.localized.insert(
            "en".to_string(),
            LocalizedText {
                prompt: "shadowed".to_string(),
                options: ["a", "b", "c", "d"].map(String::from),
            },
        );
        let text = resolve(&item, Language::En);
        assert_eq!(text.prompt, "What is 2 + 2?");
    }

    #[test]
    fn override_is_used_when_present() {
        let item = item_with_tamil_only();
        assert_eq!(resolve(&item, Language::Ta).prompt, "2 + 2 என்ன?");
    }

    #[test]
    fn missing_override_falls_back() {
        let item = item_with_tamil_only();
        let text = resolve(&item, Language::Hi);
        assert_eq!(text.prompt, item.prompt);
        assert_eq!(text.options, &item.options);
    }

    #[test]
    fn parses_codes() {
        assert_eq!("TA".parse::<Language>(), Ok(Language::Ta));
        assert_eq!(" hi ".parse::<Language>(), Ok(Language::Hi));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn next_cycles_through_all() {
        let mut lang = Language::En;
        for _ in 0..Language::ALL.len() {
            lang = lang.next();
        }
        assert_eq!(lang, Language::En);
    }

    proptest! {
        #[test]
        fn items_without_overrides_always_resolve_to_default(index in 0usize..10, lang in 0usize..3) {
            let mut item = demo::questions().remove(index);
            item.localized.clear();
            let text = resolve(&item, Language::ALL[lang]);
            prop_assert_eq!(text.prompt, item.prompt.as_str());
            prop_assert_eq!(text.options, &item.options);
        }
    }
}
