//! Exact, whole-text utilities over the blacklist.
//!
//! Unlike [`crate::analyze`] these don't do any fuzzy matching or index
//! bookkeeping. Every blacklisted word is matched case-insensitively, and
//! any run of non-alphanumeric characters is allowed between its letters,
//! so `f.u_c-k` and `f u c k` both match `fuck`.

use crate::{leet, Dictionary};
use lazy_regex::regex_replace_all;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

/// Compiled matcher of a single blacklisted word
#[derive(Debug, Clone)]
pub(crate) struct WordPattern {
    regex: Regex,
}

impl WordPattern {
    pub(crate) fn new(word: &str) -> Self {
        let pattern = word
            .chars()
            .map(|char| regex::escape(char.encode_utf8(&mut [0; 4])))
            .collect::<Vec<_>>()
            .join("[^a-zA-Z0-9]*");

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|err| {
                panic!("BUG: escaped word `{word}` produced an invalid regex `{pattern}`: {err}")
            });

        Self { regex }
    }
}

/// What to put in place of a censored match
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Keep the first character and the whitespace of the match,
    /// replace every other character with the given one
    Mask(char),

    /// Replace the whole match with the given text
    Text(String),
}

impl Default for Replacement {
    fn default() -> Self {
        Self::Mask('*')
    }
}

impl From<&str> for Replacement {
    /// `"***"` and single-character strings produce a [`Replacement::Mask`],
    /// anything else is a [`Replacement::Text`]
    fn from(replacement: &str) -> Self {
        if replacement == "***" {
            return Self::default();
        }

        let mut chars = replacement.chars();
        match (chars.next(), chars.next()) {
            (Some(char), None) => Self::Mask(char),
            _ => Self::Text(replacement.to_owned()),
        }
    }
}

impl Replacement {
    fn apply<'t>(&'t self, matched: &str) -> Cow<'t, str> {
        let mask = match self {
            Self::Text(text) => return Cow::Borrowed(text),
            Self::Mask(mask) => *mask,
        };

        let masked = matched
            .chars()
            .enumerate()
            .map(|(i, char)| {
                if i == 0 || char.is_whitespace() {
                    char
                } else {
                    mask
                }
            })
            .collect();

        Cow::Owned(masked)
    }
}

/// Replaces every occurrence of every blacklisted word in `text`
pub fn censor(dict: &Dictionary, text: &str, replacement: &Replacement) -> String {
    dict.blacklist()
        .patterns()
        .iter()
        .fold(text.to_owned(), |text, pattern| {
            pattern
                .regex
                .replace_all(&text, |caps: &regex::Captures<'_>| {
                    replacement.apply(&caps[0]).into_owned()
                })
                .into_owned()
        })
}

/// Removes every occurrence of every blacklisted word from `text` and
/// squashes the whitespace that is left behind
pub fn filter(dict: &Dictionary, text: &str) -> String {
    let removed = dict
        .blacklist()
        .patterns()
        .iter()
        .fold(text.to_owned(), |text, pattern| {
            pattern.regex.replace_all(&text, "").into_owned()
        });

    regex_replace_all!(r"\s+", &removed, " ").trim().to_owned()
}

/// Returns `true` if any blacklisted word occurs in `text`
pub fn flag(dict: &Dictionary, text: &str) -> bool {
    dict.blacklist()
        .patterns()
        .iter()
        .any(|pattern| pattern.regex.is_match(text))
}

/// Collects every occurrence of every blacklisted word in `text`. The result
/// is ordered by the blacklist order first and by position second.
pub fn extract(dict: &Dictionary, text: &str) -> Vec<String> {
    dict.blacklist()
        .patterns()
        .iter()
        .flat_map(|pattern| pattern.regex.find_iter(text))
        .map(|found| found.as_str().to_owned())
        .collect()
}

/// Same as [`censor`], but decodes leet-speak in `text` first
pub fn leet_censor(dict: &Dictionary, text: &str, replacement: &Replacement) -> String {
    censor(dict, &leet::decode(text), replacement)
}

/// Same as [`filter`], but decodes leet-speak in `text` first
pub fn leet_filter(dict: &Dictionary, text: &str) -> String {
    filter(dict, &leet::decode(text))
}

/// Same as [`flag`], but decodes leet-speak in `text` first
pub fn leet_flag(dict: &Dictionary, text: &str) -> bool {
    flag(dict, &leet::decode(text))
}

/// Same as [`extract`], but decodes leet-speak in `text` first
pub fn leet_extract(dict: &Dictionary, text: &str) -> Vec<String> {
    extract(dict, &leet::decode(text))
}
