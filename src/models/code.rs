use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::error::LayoutError;
use crate::logic::codes::is_valid_letter_code;

/// Typed form of a bed code: `B` is `{ letter: 'B', suffix: None }`,
/// `B12` is `{ letter: 'B', suffix: Some(12) }`. Serialised as its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub struct BedCode {
    letter: char,
    suffix: Option<u32>,
}

impl BedCode {
    /// Returns `None` unless `letter` is `A`-`Z`.
    pub fn bare(letter: char) -> Option<Self> {
        letter.is_ascii_uppercase().then_some(Self {
            letter,
            suffix: None,
        })
    }

    /// Returns `None` unless `letter` is `A`-`Z` and `suffix` is positive.
    pub fn compound(letter: char, suffix: u32) -> Option<Self> {
        (letter.is_ascii_uppercase() && suffix > 0).then_some(Self {
            letter,
            suffix: Some(suffix),
        })
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn suffix(&self) -> Option<u32> {
        self.suffix
    }

    pub fn is_compound(&self) -> bool {
        self.suffix.is_some()
    }
}

impl fmt::Display for BedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suffix {
            Some(n) => write!(f, "{}{}", self.letter, n),
            None => write!(f, "{}", self.letter),
        }
    }
}

impl FromStr for BedCode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_letter_code(s) {
            return Err(LayoutError::InvalidCode(s.to_string()));
        }
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| LayoutError::InvalidCode(s.to_string()))?;
        let digits = chars.as_str();
        let suffix = if digits.is_empty() {
            None
        } else {
            // Syntactically valid but wider than u32.
            Some(
                digits
                    .parse::<u32>()
                    .map_err(|_| LayoutError::InvalidCode(s.to_string()))?,
            )
        };
        Ok(Self { letter, suffix })
    }
}

impl PartialOrd for BedCode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Letter first; within a letter the bare code comes before every compound,
/// and compounds follow their numeric suffix.
impl Ord for BedCode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.letter
            .cmp(&other.letter)
            .then_with(|| self.suffix.cmp(&other.suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_and_compound() {
        let bare: BedCode = "C".parse().unwrap();
        assert_eq!(bare.letter(), 'C');
        assert_eq!(bare.suffix(), None);

        let compound: BedCode = "C12".parse().unwrap();
        assert_eq!(compound.letter(), 'C');
        assert_eq!(compound.suffix(), Some(12));
        assert!(compound.is_compound());
    }

    #[test]
    fn test_parse_rejects_invalid() {
        for raw in ["", "c", "A0", "A01", "AB", "1A", "A99999999999"] {
            assert!(
                raw.parse::<BedCode>().is_err(),
                "'{raw}' must not parse as a bed code"
            );
        }
    }

    #[test]
    fn test_display_matches_input() {
        for raw in ["A", "Z", "B7", "Q120"] {
            let code: BedCode = raw.parse().unwrap();
            assert_eq!(code.to_string(), raw);
        }
    }

    #[test]
    fn test_constructors_reject_out_of_range() {
        assert!(BedCode::bare('a').is_none());
        assert!(BedCode::compound('A', 0).is_none());
        assert_eq!(BedCode::compound('A', 3).map(|c| c.to_string()).as_deref(), Some("A3"));
    }

    #[test]
    fn test_ordering_bare_first_then_numeric() {
        let mut codes: Vec<BedCode> = ["A10", "B", "A2", "A"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        codes.sort();
        let sorted: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        assert_eq!(sorted, vec!["A", "A2", "A10", "B"]);
    }

    #[test]
    fn test_serde_as_string() {
        let code: BedCode = "D4".parse().unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"D4\"");
        let back: BedCode = serde_json::from_str("\"D4\"").unwrap();
        assert_eq!(back, code);
        assert!(serde_json::from_str::<BedCode>("\"d4\"").is_err());
    }
}
