use crate::{
    AnalyzeKind, AnalyzeOptions, Analyzer, ConfigError, Dictionary, DictionaryStore, Lang, Word,
    WordList, DEFAULT_THRESHOLD,
};
use serde::Deserialize;
use std::sync::Arc;

/// Prefix of the environment variables the [`Config`] is loaded from
pub const ENV_PREFIX: &str = "CENSY_";

/// Configuration of an [`Analyzer`] loaded from the environment:
///
/// - `CENSY_KIND` - `username` or `text` (default)
/// - `CENSY_THRESHOLD` - reserved, see [`AnalyzeOptions::threshold`]
/// - `CENSY_LANG` - language tag of the words below
/// - `CENSY_BLACKLIST`, `CENSY_WHITELIST` - comma-separated words
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub kind: AnalyzeKind,

    #[serde(default = "default_threshold")]
    pub threshold: u32,

    pub lang: Option<Lang>,

    #[serde(default)]
    pub blacklist: Vec<String>,

    #[serde(default)]
    pub whitelist: Vec<String>,
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::prefixed(ENV_PREFIX).from_env()?)
    }

    /// Same as [`Self::from_env`], but reads the given variables instead
    /// of the process environment
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter(vars)?)
    }

    pub fn analyze_options(&self) -> AnalyzeOptions {
        AnalyzeOptions {
            kind: self.kind,
            threshold: self.threshold,
        }
    }

    pub fn dictionary(&self) -> Result<Dictionary, ConfigError> {
        let list = |words: &[String]| -> Result<WordList, ConfigError> {
            let mut list = WordList::new();
            list.insert(self.lang.as_ref(), &Word::parse_all(words)?);
            Ok(list)
        };

        Ok(Dictionary::new(list(&self.blacklist)?, list(&self.whitelist)?))
    }

    pub fn into_analyzer(self) -> Result<Analyzer, ConfigError> {
        let store = DictionaryStore::new(self.dictionary()?);
        Ok(Analyzer::new(Arc::new(store)).with_options(self.analyze_options()))
    }
}
