use std::collections::BTreeSet;
use std::fmt;

/// Literal characters removed from every text cell. Order and duplicates in
/// the user's input do not matter, and no character has pattern meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripSet {
    chars: BTreeSet<char>,
}

impl StripSet {
    pub fn parse(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn strip(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }
        text.chars().filter(|ch| !self.contains(*ch)).collect()
    }
}

impl fmt::Display for StripSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let set = StripSet::parse("##$#$");
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "#$");
    }

    #[test]
    fn metacharacters_are_literal() {
        let set = StripSet::parse(".*[]\\^$");
        assert_eq!(set.strip("a.b*c[d]e\\f^g$h"), "abcdefgh");
        assert_eq!(set.strip("xyz"), "xyz");
    }

    #[test]
    fn empty_set_strips_nothing() {
        let set = StripSet::parse("");
        assert!(set.is_empty());
        assert_eq!(set.strip("a.b#c"), "a.b#c");
    }
}
