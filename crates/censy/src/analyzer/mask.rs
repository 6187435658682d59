use super::chars::CharExt;

/// Set of character positions in the original text
#[derive(Debug, Clone)]
pub(crate) struct PositionSet {
    members: Vec<bool>,
}

impl PositionSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            members: vec![false; len],
        }
    }

    pub(crate) fn insert(&mut self, idx: usize) {
        if let Some(member) = self.members.get_mut(idx) {
            *member = true;
        }
    }

    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.members.get(idx).copied().unwrap_or(false)
    }
}

pub(crate) const MASK_CHAR: char = '*';

/// Replaces every profane character of `text` with [`MASK_CHAR`] except
/// for the unmaskable separators
pub(crate) fn mask(text: &[char], profane: &PositionSet) -> String {
    text.iter()
        .enumerate()
        .map(|(idx, &char)| {
            if char.is_unmaskable() || !profane.contains(idx) {
                char
            } else {
                MASK_CHAR
            }
        })
        .collect()
}
