//! IRI reference identifiers.

use std::fmt;

/// Error type for IRI parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IriParseError {
    pub message: String,
}

impl fmt::Display for IriParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for IriParseError {}

/// An IRI reference.
///
/// Identities and reference-valued properties serialize as bare strings
/// on the wire. Relative references are accepted; the only structural
/// requirements are non-emptiness and the absence of whitespace and
/// control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(String);

impl Iri {
    /// Parses an IRI reference from a string.
    pub fn new(value: impl Into<String>) -> Result<Self, IriParseError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IriParseError {
                message: "IRI is empty".to_string(),
            });
        }
        if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(IriParseError {
                message: format!("IRI contains whitespace or control characters: {}", value),
            });
        }
        Ok(Self(value))
    }

    /// Returns the IRI text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Iri {
    type Err = IriParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Iri::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_absolute_and_relative() {
        assert!(Iri::new("https://example.com/notes/1").is_ok());
        assert!(Iri::new("/notes/1").is_ok());
        assert!(Iri::new("urn:uuid:6e770264").is_ok());
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert!(Iri::new("").is_err());
        assert!(Iri::new("https://example.com/a b").is_err());
        assert!(Iri::new("line\nbreak").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let iri = Iri::new("https://example.com/x").unwrap();
        assert_eq!(iri.to_string(), "https://example.com/x");
        assert_eq!(iri.as_str(), "https://example.com/x");
    }
}
