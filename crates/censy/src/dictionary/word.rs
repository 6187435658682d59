use crate::DictionaryError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Limit of the length of a single dictionary word
pub(crate) const MAX_WORD_LEN: usize = 60;

/// Normalized dictionary entry. It is lowercase and consists only of ASCII
/// letters and digits, which is the alphabet of the text the analyzer scans.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    pub fn new(word: &str) -> Result<Self, DictionaryError> {
        let word = word.trim().to_lowercase();

        if word.is_empty() {
            return Err(DictionaryError::EmptyWord);
        }

        if word.chars().count() > MAX_WORD_LEN {
            return Err(DictionaryError::WordTooLong { word });
        }

        if let Some(invalid_char) = word.chars().find(|char| !char.is_ascii_alphanumeric()) {
            return Err(DictionaryError::MalformedWord { word, invalid_char });
        }

        Ok(Self(word))
    }

    /// Validates all words up front, so that a batch is applied fully or not at all
    pub(crate) fn parse_all<I>(words: I) -> Result<Vec<Word>, DictionaryError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| Self::new(word.as_ref()))
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Language tag that partitions the word lists, e.g. `en` or `id`
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, Deserialize)]
#[serde(try_from = "String")]
pub struct Lang(String);

impl Lang {
    /// Partition of the words that were added without a language tag
    pub const COMMON: &'static str = "common";

    pub fn new(lang: &str) -> Result<Self, DictionaryError> {
        let valid = (2..=8).contains(&lang.len()) && lang.bytes().all(|b| b.is_ascii_lowercase());

        if !valid {
            return Err(DictionaryError::MalformedLang {
                lang: lang.to_owned(),
            });
        }

        Ok(Self(lang.to_owned()))
    }

    pub(crate) fn common() -> Self {
        Self(Self::COMMON.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Lang {
    type Err = DictionaryError;

    fn from_str(lang: &str) -> Result<Self, Self::Err> {
        Self::new(lang)
    }
}

impl TryFrom<String> for Lang {
    type Error = DictionaryError;

    fn try_from(lang: String) -> Result<Self, Self::Error> {
        Self::new(&lang)
    }
}
