use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteError {
    #[error("site identifier must not be empty")]
    Empty,
}

/// A site as typed by the operator: a numeric site number or a region name
/// such as `UKRED`.
///
/// Surrounding whitespace is dropped. Comparisons against region prefixes are
/// case-insensitive, so the raw text is kept as entered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SiteIdentifier(String);

impl SiteIdentifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used for prefix matching and hostname templating.
    pub fn normalized(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl FromStr for SiteIdentifier {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SiteError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for SiteIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let site: SiteIdentifier = "  UKRed \n".parse().unwrap();
        assert_eq!(site.as_str(), "UKRed");
        assert_eq!(site.normalized(), "ukred");
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!("".parse::<SiteIdentifier>(), Err(SiteError::Empty));
        assert_eq!("   ".parse::<SiteIdentifier>(), Err(SiteError::Empty));
    }
}
