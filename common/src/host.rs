use std::fmt;

/// A candidate hostname exactly as the caller supplied it.
///
/// No normalisation happens here: a host may carry a scheme, a `www.` prefix,
/// both or neither.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Host(String);

impl Host {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Host {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Host {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
