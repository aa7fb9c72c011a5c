use serde::{Serialize, Serializer};
use std::fmt::Display;

/// Strand of a methylKit row. CGmap reports the strand as the reference
/// base of the call, `C` for the forward strand and `G` for the reverse.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// Maps a CGmap strand code. Everything that is not `C` is treated as reverse.
    pub fn from_cgmap_code(code: &str) -> Self {
        match code {
            "C" => Strand::Forward,
            _ => Strand::Reverse,
        }
    }

    /// True for the two codes CGmap writers actually produce.
    pub fn is_known_cgmap_code(code: &str) -> bool {
        matches!(code, "C" | "G")
    }

    pub fn to_methylkit_code(&self) -> &'static str {
        match self {
            Strand::Forward => "F",
            Strand::Reverse => "R",
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_methylkit_code())
    }
}

impl Serialize for Strand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_methylkit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strand_from_cgmap_code() {
        assert_eq!(Strand::from_cgmap_code("C"), Strand::Forward);
        assert_eq!(Strand::from_cgmap_code("G"), Strand::Reverse);
        // Unexpected codes fall through to reverse
        assert_eq!(Strand::from_cgmap_code("+"), Strand::Reverse);
        assert_eq!(Strand::from_cgmap_code("c"), Strand::Reverse);
    }

    #[test]
    fn test_strand_display() {
        assert_eq!(Strand::Forward.to_string(), "F");
        assert_eq!(Strand::Reverse.to_string(), "R");
    }

    #[test]
    fn test_known_codes() {
        assert!(Strand::is_known_cgmap_code("C"));
        assert!(Strand::is_known_cgmap_code("G"));
        assert!(!Strand::is_known_cgmap_code("N"));
    }
}
