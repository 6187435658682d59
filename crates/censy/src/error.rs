use thiserror::Error;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Describes any error that may be returned from the crate's fallible APIs.
/// Analysis itself never fails, see [`AnalyzeError`] instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Dictionary {
        #[from]
        source: DictionaryError,
    },

    #[error(transparent)]
    Config {
        #[from]
        source: ConfigError,
    },
}

/// Reasons to reject the input text before analyzing it. These are not
/// returned as [`Err`], they are reported via [`crate::AnalysisResult::error`]
/// together with the `ALLOW` decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error("Invalid characters")]
    InvalidCharacters,

    #[error("Invalid length")]
    InvalidLength,
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Dictionary word must not be empty")]
    EmptyWord,

    #[error(
        "Dictionary word must not exceed {} characters (length: {}, word: {word})",
        crate::dictionary::MAX_WORD_LEN,
        word.chars().count(),
    )]
    WordTooLong { word: String },

    #[error(
        "Dictionary word must consist only of ASCII letters and digits. \
        Invalid character `{invalid_char}`, word: {word}"
    )]
    MalformedWord { word: String, invalid_char: char },

    #[error("Language tag must consist of 2 to 8 lowercase ASCII letters, got: {lang:?}")]
    MalformedLang { lang: String },

    #[error("Failed to parse the word list JSON")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Couldn't load the config from the environment")]
    Env {
        #[from]
        source: envy::Error,
    },

    #[error("Invalid word list in the config")]
    Dictionary {
        #[from]
        source: DictionaryError,
    },
}
