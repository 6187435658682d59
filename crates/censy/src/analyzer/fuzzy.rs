//! Token-level fallback for the words that the character scans missed.
//! Every whitespace-delimited token is compared with the dictionary by
//! edit distance, so misspellings like `denis` for `penis` are caught.

use super::chars::CharExt;
use super::validate::MIN_LEN;
use super::{Analysis, Confidence, Detection};
use crate::distance::osa;
use crate::{Category, Dictionary};
use std::ops::Range;
use tracing::trace;

/// Maximal edit distance (and length difference) of a fuzzy match
const MAX_DISTANCE: usize = 3;

/// Blacklisted words of this length or shorter must start with the same
/// character as the token unless they match exactly
const SHORT_WORD_LEN: usize = 3;

/// The closest dictionary word to a token
struct Candidate<'d> {
    word: &'d str,
    distance: usize,
}

impl Analysis<'_> {
    pub(crate) fn fuzzy_fallback(&mut self, dict: &Dictionary) {
        for token in tokens(self.text) {
            // The character scans have already handled this token, maybe
            // as a part of a bigger match that spans several tokens
            if token.clone().any(|idx| self.profane.contains(idx)) {
                continue;
            }

            let normalized: Vec<char> = self.text[token.clone()]
                .iter()
                .flat_map(|char| char.folded())
                .filter(|&char| char != '-')
                .collect();

            if normalized.len() < MIN_LEN {
                continue;
            }

            self.match_token(dict, token, &normalized);
        }
    }

    fn match_token(&mut self, dict: &Dictionary, token: Range<usize>, normalized: &[char]) {
        let token_word: String = normalized.iter().collect();

        if dict.whitelist().contains(&token_word) {
            self.detections.push(Detection {
                word: token_word.clone(),
                confidence: Confidence::Optimist,
                matches: vec![token_word],
                distance: 0,
                category: Category::Whitelist,
            });
            return;
        }

        let whitelisted = closest(normalized, dict.whitelist().iter(), |_, _| true);

        if let Some(good) = &whitelisted {
            self.detections.push(Detection {
                word: token_word.clone(),
                confidence: Confidence::Optimist,
                matches: vec![good.word.to_owned()],
                distance: good.distance,
                category: Category::Whitelist,
            });

            if good.distance == 0 {
                return;
            }
        }

        let blacklisted = closest(normalized, dict.blacklist().iter(), |word, distance| {
            // Ties go to the whitelist
            if whitelisted.as_ref().is_some_and(|good| good.distance <= distance) {
                return false;
            }

            // Prevents noise like `sss` being close to `ass`
            let short = word.len() <= SHORT_WORD_LEN;
            !short || distance == 0 || starts_alike(normalized, word)
        });

        let Some(bad) = blacklisted else {
            return;
        };

        let confidence = if bad.distance == 0
            || token_word.contains(bad.word)
            || starts_alike(normalized, bad.word)
        {
            Confidence::Optimist
        } else {
            Confidence::Doubt
        };

        trace!(
            token = %token_word,
            word = bad.word,
            distance = bad.distance,
            %confidence,
            "Found a fuzzy blacklist match"
        );

        self.detections.push(Detection {
            word: token_word,
            confidence,
            matches: vec![bad.word.to_owned()],
            distance: bad.distance,
            category: Category::Blacklist,
        });

        // The unit here is the whole token, so only its very first
        // character stays visible
        for idx in token.skip(1) {
            self.profane.insert(idx);
        }
    }
}

/// Finds the first word with the minimal distance to `token` among the
/// words within [`MAX_DISTANCE`] that pass the `accept` check
fn closest<'d>(
    token: &[char],
    words: impl Iterator<Item = &'d str>,
    mut accept: impl FnMut(&str, usize) -> bool,
) -> Option<Candidate<'d>> {
    let mut best: Option<Candidate<'d>> = None;

    for word in words {
        let word_chars: Vec<char> = word.chars().collect();

        if token.len().abs_diff(word_chars.len()) > MAX_DISTANCE {
            continue;
        }

        let distance = osa(token, &word_chars);

        if distance > MAX_DISTANCE || !accept(word, distance) {
            continue;
        }

        if best.as_ref().map_or(true, |best| distance < best.distance) {
            best = Some(Candidate { word, distance });
        }
    }

    best
}

fn starts_alike(token: &[char], word: &str) -> bool {
    token.first().is_some_and(|&first| word.starts_with(first))
}

/// Ranges of maximal runs of non-whitespace characters
fn tokens(text: &[char]) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut cursor = 0;

    std::iter::from_fn(move || {
        let start = cursor + text[cursor..].iter().position(|char| !char.is_whitespace())?;

        let end = text[start..]
            .iter()
            .position(|char| char.is_whitespace())
            .map_or(text.len(), |len| start + len);

        cursor = end;

        Some(start..end)
    })
}
