//! Helpers shared by the signing crates.

use std::fmt::{Debug, Formatter};

/// Shortest secret that keeps its first and last three characters visible.
const MIN_REVEAL_LEN: usize = 12;

/// Debug view of a sensitive value that is safe to log.
///
/// Empty values print as `EMPTY`, everything else as `***`. Identifiers
/// built through `From` keep three characters at each end once they are
/// long enough, so different access key ids can still be told apart in
/// logs. Secrets go through [`Redact::secret`] and never reveal anything.
pub struct Redact<'a> {
    value: &'a str,
    reveal_ends: bool,
}

impl<'a> Redact<'a> {
    /// Mask `value` completely.
    pub fn secret(value: impl Into<Redact<'a>>) -> Self {
        Redact {
            reveal_ends: false,
            ..value.into()
        }
    }

    fn ends(&self) -> Option<(&str, &str)> {
        let len = self.value.len();
        if !self.reveal_ends || len < MIN_REVEAL_LEN {
            return None;
        }
        Some((self.value.get(..3)?, self.value.get(len - 3..)?))
    }
}

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact {
            value,
            reveal_ends: true,
        }
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact::from(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact::from(value.as_deref().unwrap_or_default())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.value.is_empty() {
            return f.write_str("EMPTY");
        }
        match self.ends() {
            Some((head, tail)) => write!(f, "{head}***{tail}"),
            None => f.write_str("***"),
        }
    }
}
