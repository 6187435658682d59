use crate::leet;
use easy_ext::ext;

#[ext(CharExt)]
pub(crate) impl char {
    /// Lowercase and leet-decode. Non-ASCII characters are left as is,
    /// so the mapping is always one character to one character.
    fn normalized(self) -> char {
        leet::decode_char(self.to_ascii_lowercase())
    }

    /// Full Unicode lowercase followed by leet decoding. Unlike
    /// [`Self::normalized`] this may produce several characters, so it is
    /// only used where no index mapping is needed.
    fn folded(self) -> std::iter::Map<std::char::ToLowercase, fn(char) -> char> {
        self.to_lowercase().map(leet::decode_char as fn(char) -> char)
    }

    /// Alphabet of the character-level scans, everything else is skipped
    fn is_scannable(self) -> bool {
        self.is_ascii_alphanumeric()
    }

    /// Characters that stay visible even inside of a censored span
    fn is_unmaskable(self) -> bool {
        matches!(self, ' ' | '-' | '_' | '@')
    }
}
