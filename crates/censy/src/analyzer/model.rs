use crate::{AnalyzeError, Category};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

/// Default value of [`AnalyzeOptions::threshold`]
pub const DEFAULT_THRESHOLD: u32 = 3;

/// Selects the set of characters accepted in the input
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AnalyzeKind {
    /// ASCII letters, digits and `_ - . @ $ ! +`, no whitespace
    Username,

    /// Any non-empty text
    #[default]
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    pub kind: AnalyzeKind,

    /// Reserved for tuning the fuzzy matching. The distance cutoffs are
    /// fixed at the moment and this value doesn't influence them.
    pub threshold: u32,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            kind: AnalyzeKind::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl AnalyzeOptions {
    pub fn username() -> Self {
        Self {
            kind: AnalyzeKind::Username,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "snake_case")]
pub enum Confidence {
    /// The match is exact or very likely intended
    Optimist,

    /// The match is plausible, but may as well be a coincidence
    Doubt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "snake_case")]
pub enum Decision {
    Censor,
    Allow,
}

/// Single finding of the analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    /// Normalized form of the text that matched
    pub word: String,
    pub confidence: Confidence,

    /// Dictionary words that matched
    pub matches: Vec<String>,

    /// Edit distance between [`Self::word`] and the closest match
    pub distance: usize,
    pub category: Category,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub original: String,

    /// The original text with the profane characters masked,
    /// or the original text verbatim if nothing profane was found
    pub filtered: String,
    pub is_profane: bool,
    pub decision: Decision,

    /// Set if the input was rejected without analysis
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AnalyzeError>,

    pub detections: Vec<Detection>,
}

impl AnalysisResult {
    pub(crate) fn rejected(text: &str, error: AnalyzeError) -> Self {
        Self {
            original: text.to_owned(),
            filtered: text.to_owned(),
            is_profane: false,
            decision: Decision::Allow,
            error: Some(error),
            detections: vec![],
        }
    }

    /// Detections of the given category only
    pub fn detections_of(&self, category: Category) -> impl Iterator<Item = &Detection> + '_ {
        self.detections
            .iter()
            .filter(move |detection| detection.category == category)
    }
}
