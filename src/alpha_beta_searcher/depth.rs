use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Search depth in plies. Always at least 1.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct SearchDepth(u8);

impl SearchDepth {
    pub const MIN: SearchDepth = SearchDepth(1);

    /// Non-positive depths fall back to 1; depths beyond `u8::MAX` saturate.
    pub fn new(depth: i64) -> Self {
        if depth < 1 {
            Self::MIN
        } else {
            Self(u8::try_from(depth).unwrap_or(u8::MAX))
        }
    }

    /// Parses user input. Anything that is not a positive integer is depth 1.
    pub fn parse_lenient(input: &str) -> Self {
        input
            .trim()
            .parse::<i64>()
            .map(Self::new)
            .unwrap_or(Self::MIN)
    }

    pub fn plies(&self) -> u8 {
        self.0
    }
}

impl Default for SearchDepth {
    fn default() -> Self {
        Self(3)
    }
}

impl From<u8> for SearchDepth {
    fn from(depth: u8) -> Self {
        Self::new(i64::from(depth))
    }
}

impl FromStr for SearchDepth {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(input))
    }
}

impl fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_depths_are_kept() {
        assert_eq!(SearchDepth::new(1).plies(), 1);
        assert_eq!(SearchDepth::new(4).plies(), 4);
        assert_eq!(SearchDepth::from(2).plies(), 2);
    }

    #[test]
    fn test_non_positive_depths_default_to_one() {
        assert_eq!(SearchDepth::new(0), SearchDepth::MIN);
        assert_eq!(SearchDepth::new(-3), SearchDepth::MIN);
        assert_eq!(SearchDepth::from(0), SearchDepth::MIN);
    }

    #[test]
    fn test_unparseable_input_defaults_to_one() {
        assert_eq!(SearchDepth::parse_lenient("abc").plies(), 1);
        assert_eq!(SearchDepth::parse_lenient("").plies(), 1);
        assert_eq!(SearchDepth::parse_lenient("-2").plies(), 1);
        assert_eq!(SearchDepth::parse_lenient(" 3 ").plies(), 3);
        assert_eq!("4".parse::<SearchDepth>().unwrap().plies(), 4);
    }

    #[test]
    fn test_large_depth_saturates() {
        assert_eq!(SearchDepth::new(1000).plies(), u8::MAX);
    }
}
