//! Detection and masking of profanity in a single piece of text.
//!
//! The pipeline runs the following stages:
//!
//! 1. Validation of the length and the charset of the input.
//! 2. Projection of the text onto its lowercase, leet-decoded and
//!    alphanumeric-only form, remembering where each character came from.
//! 3. Whitelist scan, that marks the characters covered by allowed words as safe.
//! 4. Blacklist scan, that accepts matches not fully covered by safe characters.
//! 5. Fuzzy fallback by edit distance for the tokens left untouched.
//! 6. Decision and masking of the profane characters.

mod chars;
mod fuzzy;
mod mask;
mod model;
mod scan;
mod validate;

pub use model::*;

use crate::{Category, Dictionary, DictionaryStore};
use mask::PositionSet;
use scan::ScanSurface;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Mutable state of a single analysis
pub(crate) struct Analysis<'t> {
    /// The original text split into characters. All positions refer to it.
    text: &'t [char],
    safe: PositionSet,
    profane: PositionSet,
    detections: Vec<Detection>,
}

/// Analyzes the text against the given dictionary. This never fails,
/// rejected input is reported via [`AnalysisResult::error`].
#[instrument(
    level = "debug",
    skip_all,
    fields(kind = %options.kind, threshold = options.threshold, len = text.chars().count())
)]
pub fn analyze(dict: &Dictionary, text: &str, options: &AnalyzeOptions) -> AnalysisResult {
    if let Err(err) = validate::validate(text, options.kind) {
        debug!(%err, "Rejected the input");
        return AnalysisResult::rejected(text, err);
    }

    let chars: Vec<char> = text.chars().collect();

    let mut analysis = Analysis {
        text: &chars,
        safe: PositionSet::new(chars.len()),
        profane: PositionSet::new(chars.len()),
        detections: vec![],
    };

    let surface = ScanSurface::new(&chars);

    analysis.scan_whitelist(&surface, dict.whitelist());
    analysis.scan_blacklist(&surface, dict.blacklist());
    analysis.fuzzy_fallback(dict);

    let Analysis {
        profane,
        detections,
        ..
    } = analysis;

    let is_profane = detections
        .iter()
        .any(|detection| detection.category == Category::Blacklist);

    let (decision, filtered) = if is_profane {
        (Decision::Censor, mask::mask(&chars, &profane))
    } else {
        (Decision::Allow, text.to_owned())
    };

    debug!(%decision, detections = detections.len(), "Analysis finished");

    AnalysisResult {
        original: text.to_owned(),
        filtered,
        is_profane,
        decision,
        error: None,
        detections,
    }
}

/// Analyzer bound to a shared [`DictionaryStore`]. Every analysis runs
/// against a snapshot of the dictionary taken when it starts, so concurrent
/// mutations of the store never affect it.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    store: Arc<DictionaryStore>,
    options: AnalyzeOptions,
}

impl Analyzer {
    pub fn new(store: Arc<DictionaryStore>) -> Self {
        Self {
            store,
            options: AnalyzeOptions::default(),
        }
    }

    /// Overrides the options used by [`Self::analyze`]
    pub fn with_options(self, options: AnalyzeOptions) -> Self {
        Self { options, ..self }
    }

    pub fn store(&self) -> &Arc<DictionaryStore> {
        &self.store
    }

    pub fn options(&self) -> &AnalyzeOptions {
        &self.options
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.analyze_with(text, &self.options)
    }

    pub fn analyze_with(&self, text: &str, options: &AnalyzeOptions) -> AnalysisResult {
        analyze(&self.store.snapshot(), text, options)
    }
}
