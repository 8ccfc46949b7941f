//! Recipient list input conversions.

/// A list of candidate recipient addresses, accepted by the builder's
/// `to`/`cc`/`bcc` methods.
///
/// Converts from a single comma-separated string (each piece trimmed of
/// surrounding whitespace) or from a sequence of strings (taken
/// verbatim). Candidates are not validated here; the builder validates
/// the whole batch before appending any of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients(Vec<String>);

impl Recipients {
    /// Returns the candidate addresses in input order.
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        &self.0
    }

    /// Consumes the list, yielding the candidates.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Recipients {
    fn from(value: &str) -> Self {
        Self(value.split(',').map(|s| s.trim().to_string()).collect())
    }
}

impl From<String> for Recipients {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Vec<String>> for Recipients {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(value: Vec<&str>) -> Self {
        Self(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Recipients {
    fn from(value: &[&str]) -> Self {
        Self(value.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Recipients {
    fn from(value: [&str; N]) -> Self {
        Self::from(value.as_slice())
    }
}
