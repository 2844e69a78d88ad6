//! Splitting of composed log lines into space-delimited fields

/// One composed log line split on ASCII spaces.
///
/// Positions 0..=2 normally hold the severity prefix, the date and the time;
/// the call-site location follows, then the message words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<String>,
}

/// Index of the location field on a line carrying both date and time.
pub const LOCATION_INDEX: usize = 3;

/// Minimum number of fields a line needs before it is rewritten.
pub const MIN_TOKENS: usize = 4;

impl TokenSequence {
    /// Split `raw` on every `' '`, dropping empty fields.
    pub fn tokenize(raw: &str) -> Self {
        Self {
            tokens: raw
                .split(' ')
                .filter(|field| !field.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Index of the call-site location field, if the line has one.
    ///
    /// The field after the date and time is inspected first; a line with one
    /// leading field less carries its location at index 2. `None` when
    /// neither field looks like a location, e.g. because a path containing a
    /// space was split across fields.
    pub fn location_index(&self) -> Option<usize> {
        [LOCATION_INDEX, LOCATION_INDEX - 1]
            .into_iter()
            .find(|&index| self.get(index).is_some_and(is_location_token))
    }

    /// Join the fields back with a single space between each pair.
    pub fn join(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut String> {
        self.tokens.get_mut(index)
    }

    pub fn first(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }

    pub fn push_front(&mut self, token: impl Into<String>) {
        self.tokens.insert(0, token.into());
    }

    pub fn push_back(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_inner(self) -> Vec<String> {
        self.tokens
    }
}

/// Whether `token` has the shape of a `file:line:` location field.
///
/// Absolute paths (`/src/app/main.rs:12:`) match on their leading separator;
/// relative ones must end in `:<digits>:`.
pub fn is_location_token(token: &str) -> bool {
    let Some(stem) = token.strip_suffix(':') else {
        return false;
    };
    if token.starts_with('/') {
        return true;
    }
    match stem.rsplit_once(':') {
        Some((path, line)) => {
            !path.is_empty() && !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_collapses_spaces() {
        let tokens = TokenSequence::tokenize("INFO:  2024/01/01 00:00:00   a.rs:1: hi\n");
        assert_eq!(
            tokens.as_slice(),
            ["INFO:", "2024/01/01", "00:00:00", "a.rs:1:", "hi\n"]
        );
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert!(TokenSequence::tokenize("").is_empty());
        assert!(TokenSequence::tokenize("   ").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_tabs_inside_fields() {
        let tokens = TokenSequence::tokenize("a\tb c");
        assert_eq!(tokens.as_slice(), ["a\tb", "c"]);
    }

    #[test]
    fn test_location_index_with_date_and_time() {
        let tokens = TokenSequence::tokenize("INFO: 2024/01/01 00:00:00 /app/src/main.rs:10: hi\n");
        assert_eq!(tokens.location_index(), Some(3));

        let tokens = TokenSequence::tokenize("INFO: 2024/01/01 00:00:00 src/main.rs:10: hi\n");
        assert_eq!(tokens.location_index(), Some(LOCATION_INDEX));
    }

    #[test]
    fn test_location_index_with_one_leading_field_less() {
        let tokens = TokenSequence::tokenize("INFO: 00:00:00 src/main.rs:10: hello world\n");
        assert_eq!(tokens.location_index(), Some(2));
    }

    #[test]
    fn test_location_index_on_short_line() {
        let tokens = TokenSequence::tokenize("INFO: x");
        assert_eq!(tokens.location_index(), None);
    }

    #[test]
    fn test_location_split_by_space_is_not_found() {
        let tokens = TokenSequence::tokenize(
            "INFO: 2024/01/01 00:00:00 C:\\Users\\John Doe\\app\\main.rs:5: hi\n",
        );
        assert_eq!(tokens.location_index(), None);

        let tokens = TokenSequence::tokenize("INFO: 2024/01/01 00:00:00 /home/a b/main.rs:5: hi\n");
        assert_eq!(tokens.location_index(), None);
    }

    #[test]
    fn test_location_shapes() {
        assert!(is_location_token("/abs/path/file.go:42:"));
        assert!(is_location_token("/weird:"));
        assert!(is_location_token("pkg/file.go:10:"));
        assert!(is_location_token("main.rs:7:"));
        assert!(!is_location_token("00:00:00"));
        assert!(!is_location_token("2024/01/01"));
        assert!(!is_location_token("note:"));
        assert!(!is_location_token("file.rs:ab:"));
        assert!(!is_location_token(":12:"));
    }

    #[test]
    fn test_join_single_spaces() {
        let tokens = TokenSequence::from_tokens(vec!["a".into(), "b".into(), "c\n".into()]);
        assert_eq!(tokens.join(), "a b c\n");
    }
}
