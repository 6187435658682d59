//! Blacklist and whitelist of words consumed by the analyzer.

mod store;
mod word;
mod word_list;

pub use store::*;
pub use word::*;
pub use word_list::*;

use serde::Serialize;

/// Which of the two word lists a word or a detection belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Blacklist,
    Whitelist,
}

/// Immutable pair of word lists. The analyzer reads it for the whole
/// duration of a single analysis, so it must not change in the meantime,
/// see [`DictionaryStore`] for sharing it between threads.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    pub(crate) blacklist: WordList,
    pub(crate) whitelist: WordList,
}

impl Dictionary {
    pub fn new(blacklist: WordList, whitelist: WordList) -> Self {
        Self {
            blacklist,
            whitelist,
        }
    }

    /// Words that are considered profane
    pub fn blacklist(&self) -> &WordList {
        &self.blacklist
    }

    /// Words that must not be flagged even though they contain or resemble
    /// a profane word, e.g. `class` contains `ass`
    pub fn whitelist(&self) -> &WordList {
        &self.whitelist
    }

    pub fn list(&self, category: Category) -> &WordList {
        match category {
            Category::Blacklist => &self.blacklist,
            Category::Whitelist => &self.whitelist,
        }
    }

    pub fn list_mut(&mut self, category: Category) -> &mut WordList {
        match category {
            Category::Blacklist => &mut self.blacklist,
            Category::Whitelist => &mut self.whitelist,
        }
    }

    pub fn blacklist_mut(&mut self) -> &mut WordList {
        &mut self.blacklist
    }

    pub fn whitelist_mut(&mut self) -> &mut WordList {
        &mut self.whitelist
    }
}
