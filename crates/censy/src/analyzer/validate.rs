use super::AnalyzeKind;
use crate::AnalyzeError;

/// Inclusive bounds of the input length in characters
pub(crate) const MIN_LEN: usize = 3;
pub(crate) const MAX_LEN: usize = 100;

pub(crate) fn validate(text: &str, kind: AnalyzeKind) -> Result<(), AnalyzeError> {
    // Empty input has no valid characters at all
    if text.is_empty() || !text.chars().all(|char| kind.accepts(char)) {
        return Err(AnalyzeError::InvalidCharacters);
    }

    let len = text.chars().count();

    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return Err(AnalyzeError::InvalidLength);
    }

    Ok(())
}

impl AnalyzeKind {
    fn accepts(self, char: char) -> bool {
        match self {
            Self::Username => {
                char.is_ascii_alphanumeric() || matches!(char, '_' | '-' | '.' | '@' | '$' | '!' | '+')
            }
            Self::Text => true,
        }
    }
}
