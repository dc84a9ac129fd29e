// ── Display paths ──

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Separator between segments in the textual form of a path.
pub const PATH_SEPARATOR: char = ',';

/// Route from the tree root to one attribute, by display name.
///
/// The textual form joins segments with `,`:
/// `"BIOS,Boot Settings,Boot Mode"`. All segments but the last name groups;
/// the last names the attribute. Segments are matched verbatim, so
/// surrounding whitespace is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DisplayPath(Vec<String>);

impl DisplayPath {
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Split the textual form. The empty string has no segments.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        Self(raw.split(PATH_SEPARATOR).map(String::from).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The attribute's own name (last segment).
    pub fn attribute_name(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl fmt::Display for DisplayPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.0 {
            if !first {
                write!(f, "{PATH_SEPARATOR}")?;
            }
            f.write_str(segment)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for DisplayPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for DisplayPath {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl Serialize for DisplayPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DisplayPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_comma() {
        let path = DisplayPath::parse("BIOS,Boot Settings,Boot Mode");
        assert_eq!(path.len(), 3);
        assert_eq!(path.attribute_name(), Some("Boot Mode"));
    }

    #[test]
    fn empty_string_has_no_segments() {
        assert!(DisplayPath::parse("").is_empty());
    }

    #[test]
    fn whitespace_is_preserved() {
        let path = DisplayPath::parse("BIOS, Boot Mode");
        assert_eq!(path.segments()[1], " Boot Mode");
    }

    #[test]
    fn display_rejoins_segments() {
        let raw = "NIC,Integrated NIC 1,Port 1,Partition 1,Vlan Tagged";
        assert_eq!(DisplayPath::parse(raw).to_string(), raw);
    }
}
