use super::{Lang, Word};
use crate::pattern::WordPattern;
use crate::DictionaryError;
use indexmap::{IndexMap, IndexSet};
use once_cell::sync::OnceCell;

/// Set of normalized words partitioned by language.
///
/// Iteration goes over the union of all partitions without duplicates,
/// in the order of partitions and then in the order of insertion. This
/// order is observable: it defines the order of detections and which word
/// wins when several fuzzy candidates are equally close.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    by_lang: IndexMap<Lang, IndexSet<String>>,
    merged: IndexSet<String>,

    /// Lazily compiled regexes for [`crate::pattern`], reset on every mutation
    patterns: OnceCell<Vec<WordPattern>>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the list from words that don't belong to any specific language
    pub fn from_words<I>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut list = Self::new();
        list.insert(None, &Word::parse_all(words)?);
        Ok(list)
    }

    /// Parses the list from a JSON object that maps language tags to arrays
    /// of words, e.g. `{ "en": ["troll"], "id": ["pepek"] }`
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let raw: IndexMap<Lang, Vec<String>> = serde_json::from_str(json)?;

        let mut list = Self::new();
        for (lang, words) in raw {
            list.insert(Some(&lang), &Word::parse_all(words)?);
        }

        Ok(list)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.merged.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.merged.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.merged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }

    pub fn langs(&self) -> impl Iterator<Item = &Lang> + '_ {
        self.by_lang.keys()
    }

    /// Words of the given language partition only
    pub fn words_of(&self, lang: &Lang) -> impl Iterator<Item = &str> + '_ {
        self.by_lang
            .get(lang)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Adds the words to the partition of `lang`, or to the
    /// [`Lang::COMMON`] partition if no language is specified.
    pub fn insert(&mut self, lang: Option<&Lang>, words: &[Word]) {
        let lang = lang.cloned().unwrap_or_else(Lang::common);

        self.by_lang
            .entry(lang)
            .or_default()
            .extend(words.iter().map(|word| word.as_str().to_owned()));

        self.on_change();
    }

    /// Removes the words from the partition of `lang`, or from every
    /// partition if no language is specified.
    pub fn remove(&mut self, lang: Option<&Lang>, words: &[Word]) {
        for (key, partition) in &mut self.by_lang {
            if lang.is_some_and(|lang| lang != key) {
                continue;
            }
            for word in words {
                partition.shift_remove(word.as_str());
            }
        }

        self.on_change();
    }

    /// Replaces the partition of `lang` with the given words. If no language
    /// is specified, then the whole list is cleared and the words are put
    /// into the [`Lang::COMMON`] partition.
    pub fn replace(&mut self, lang: Option<&Lang>, words: &[Word]) {
        match lang {
            Some(lang) => {
                if let Some(partition) = self.by_lang.get_mut(lang) {
                    partition.clear();
                }
            }
            None => self.by_lang.clear(),
        }

        self.insert(lang, words);
    }

    pub(crate) fn patterns(&self) -> &[WordPattern] {
        self.patterns
            .get_or_init(|| self.iter().map(WordPattern::new).collect())
    }

    fn on_change(&mut self) {
        self.by_lang.retain(|_, partition| !partition.is_empty());
        self.merged = self.by_lang.values().flatten().cloned().collect();
        self.patterns = OnceCell::new();
    }
}
