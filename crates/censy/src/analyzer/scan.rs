//! Character-level scans over the alphanumeric projection of the text.
//! Separators don't interrupt a match here, so `fu ck` contains `fuck`.

use super::chars::CharExt;
use super::{Analysis, Confidence, Detection};
use crate::{Category, WordList};
use tracing::trace;

/// Lowercase, leet-decoded and alphanumeric-only form of the text
pub(crate) struct ScanSurface {
    normalized: String,

    /// Maps every position in `normalized` to the position in the original
    /// text where the character came from. Strictly increasing.
    index_map: Vec<usize>,
}

impl ScanSurface {
    pub(crate) fn new(text: &[char]) -> Self {
        let (normalized, index_map) = text
            .iter()
            .enumerate()
            .map(|(i, char)| (char.normalized(), i))
            .filter(|(char, _)| char.is_scannable())
            .unzip();

        Self {
            normalized,
            index_map,
        }
    }

    /// Original positions of every occurrence of `word`, overlapping
    /// occurrences included
    fn occurrences<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a [usize]> + 'a {
        let mut cursor = 0;

        std::iter::from_fn(move || {
            // `normalized` is pure ASCII, so byte offsets are char offsets
            let found = cursor + self.normalized.get(cursor..)?.find(word)?;
            cursor = found + 1;
            Some(&self.index_map[found..found + word.len()])
        })
    }
}

impl Analysis<'_> {
    /// Marks every character covered by a whitelisted word as safe
    pub(crate) fn scan_whitelist(&mut self, surface: &ScanSurface, whitelist: &WordList) {
        for word in whitelist.iter() {
            for positions in surface.occurrences(word) {
                positions.iter().for_each(|&idx| self.safe.insert(idx));
            }
        }
    }

    /// Records every blacklisted word that is not fully covered by the
    /// safe positions and marks its characters as profane
    pub(crate) fn scan_blacklist(&mut self, surface: &ScanSurface, blacklist: &WordList) {
        for word in blacklist.iter() {
            for positions in surface.occurrences(word) {
                if positions.iter().all(|&idx| self.safe.contains(idx)) {
                    trace!(word, "Blacklisted word is covered by the whitelist");
                    continue;
                }

                trace!(word, ?positions, "Found a blacklisted word");

                self.detections.push(Detection {
                    word: word.to_owned(),
                    confidence: Confidence::Optimist,
                    matches: vec![word.to_owned()],
                    distance: 0,
                    category: Category::Blacklist,
                });

                // The first character of the match stays visible, and so
                // does the first one after every space
                for &idx in positions.iter().skip(1) {
                    if idx > 0 && self.text[idx - 1] == ' ' {
                        continue;
                    }
                    self.profane.insert(idx);
                }
            }
        }
    }
}
