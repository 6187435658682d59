//! Decoding of leet-speak, i.e. digits and symbols used in place of the
//! letters they visually resemble.

/// Symbol to letter substitutions. None of the values is a key itself,
/// so decoding is idempotent.
const TABLE: [(char, char); 11] = [
    ('4', 'a'),
    ('@', 'a'),
    ('8', 'b'),
    ('3', 'e'),
    ('1', 'i'),
    ('!', 'i'),
    ('0', 'o'),
    ('5', 's'),
    ('$', 's'),
    ('7', 't'),
    ('+', 't'),
];

/// Returns the letter the given character stands for in leet-speak,
/// or the character itself if it isn't a known substitution.
pub fn decode_char(char: char) -> char {
    let lower = char.to_ascii_lowercase();

    TABLE
        .iter()
        .find(|(symbol, _)| *symbol == lower)
        .map(|&(_, letter)| letter)
        .unwrap_or(char)
}

/// Replaces every leet symbol in `text` with its letter. The output has
/// exactly as many characters as the input, so positions carry over 1:1.
pub fn decode(text: &str) -> String {
    text.chars().map(decode_char).collect()
}
