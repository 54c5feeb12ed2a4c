use std::collections::BTreeSet;

/// Every resolvable form found during a run, deduplicated.
///
/// Iteration order is lexical, which keeps written output stable across runs
/// regardless of the order in which workers finished.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultCollection(BTreeSet<String>);

impl ResultCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, form: &str) -> bool {
        self.0.contains(form)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// One form per line, no trailing newline.
    pub fn to_text(&self) -> String {
        self.iter().collect::<Vec<&str>>().join("\n")
    }
}

impl Extend<String> for ResultCollection {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<S: Into<String>> FromIterator<S> for ResultCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
