//! Detection of obfuscated profanity in short user-supplied strings such as
//! usernames and chat messages.
//!
//! The main entry point is [`analyze`] (or [`Analyzer`] bound to a shared
//! [`DictionaryStore`]). It sees through leet-speak (`a$$h0le`), separators
//! (`f-u-c-k`, `fu ck`) and misspellings (`denis`), and returns a masked
//! version of the text that keeps the first letters readable (`a******`).

mod analyzer;
mod config;
mod dictionary;
mod error;

pub mod distance;
pub mod leet;
pub mod pattern;
pub mod similarity;

pub use analyzer::*;
pub use config::*;
pub use dictionary::*;
pub use distance::distance;
pub use error::*;
pub use similarity::similarity;
