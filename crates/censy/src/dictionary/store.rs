use super::{Category, Dictionary, Lang, Word, WordList};
use crate::DictionaryError;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Shared, mutable home of a [`Dictionary`].
///
/// Readers take a [`snapshot`](Self::snapshot) which is never affected by
/// later mutations. Mutations are serialized behind a write lock and copy
/// the dictionary if any snapshot of it is still alive, so an in-flight
/// analysis always sees a consistent pair of word lists.
#[derive(Debug, Default)]
pub struct DictionaryStore {
    current: RwLock<Arc<Dictionary>>,
}

impl DictionaryStore {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            current: RwLock::new(Arc::new(dictionary)),
        }
    }

    pub fn snapshot(&self) -> Arc<Dictionary> {
        self.current.read().clone()
    }

    /// Applies an arbitrary mutation atomically with respect to readers
    pub fn update<R>(&self, mutate: impl FnOnce(&mut Dictionary) -> R) -> R {
        let mut current = self.current.write();
        mutate(Arc::make_mut(&mut current))
    }

    pub fn add_blacklist<I>(&self, lang: Option<&Lang>, words: I) -> Result<(), DictionaryError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.mutate(Category::Blacklist, lang, words, WordList::insert, "add")
    }

    pub fn remove_blacklist<I>(&self, lang: Option<&Lang>, words: I) -> Result<(), DictionaryError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.mutate(Category::Blacklist, lang, words, WordList::remove, "remove")
    }

    pub fn override_blacklist<I>(&self, lang: Option<&Lang>, words: I) -> Result<(), DictionaryError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.mutate(Category::Blacklist, lang, words, WordList::replace, "override")
    }

    pub fn add_whitelist<I>(&self, lang: Option<&Lang>, words: I) -> Result<(), DictionaryError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.mutate(Category::Whitelist, lang, words, WordList::insert, "add")
    }

    pub fn remove_whitelist<I>(&self, lang: Option<&Lang>, words: I) -> Result<(), DictionaryError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.mutate(Category::Whitelist, lang, words, WordList::remove, "remove")
    }

    pub fn override_whitelist<I>(&self, lang: Option<&Lang>, words: I) -> Result<(), DictionaryError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.mutate(Category::Whitelist, lang, words, WordList::replace, "override")
    }

    fn mutate<I>(
        &self,
        category: Category,
        lang: Option<&Lang>,
        words: I,
        op: fn(&mut WordList, Option<&Lang>, &[Word]),
        op_name: &'static str,
    ) -> Result<(), DictionaryError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        // Validate outside of the lock, the batch is applied fully or not at all
        let words = Word::parse_all(words)?;

        let total = self.update(|dict| {
            let list = dict.list_mut(category);
            op(list, lang, &words);
            list.len()
        });

        debug!(
            %category,
            lang = lang.map(Lang::as_str),
            words = words.len(),
            total,
            "Applied `{op_name}` to the word list"
        );

        Ok(())
    }
}

impl From<Dictionary> for DictionaryStore {
    fn from(dictionary: Dictionary) -> Self {
        Self::new(dictionary)
    }
}
