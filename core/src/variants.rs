//! # Host Variants
//!
//! Derives the textual forms of a host that are worth probing.
//!
//! Each [`HostForm`] is a prefix toggle: if the host already starts with the
//! prefix it is stripped, otherwise the canonical prefix is prepended. Every
//! rule is applied to the *original* host, never to another rule's output,
//! and the results are collected into a set so coinciding forms collapse.

use std::collections::BTreeSet;

/// Prefix rewriting rules applied to every host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostForm {
    Www,
    Https,
    Http,
}

impl HostForm {
    pub const ALL: [HostForm; 3] = [HostForm::Www, HostForm::Https, HostForm::Http];

    /// Prefixes that count as "already present" for this rule.
    fn matched_prefixes(self) -> &'static [&'static str] {
        match self {
            HostForm::Www => &["www."],
            HostForm::Https => &["http://", "https://"],
            HostForm::Http => &["http://"],
        }
    }

    /// Prefix prepended when none of the matched prefixes is present.
    fn canonical_prefix(self) -> &'static str {
        match self {
            HostForm::Www => "www.",
            HostForm::Https => "https://",
            HostForm::Http => "http://",
        }
    }

    pub fn apply(self, host: &str) -> String {
        for prefix in self.matched_prefixes() {
            if let Some(rest) = host.strip_prefix(prefix) {
                return rest.to_string();
            }
        }
        format!("{}{}", self.canonical_prefix(), host)
    }
}

/// The original host plus one rewrite per [`HostForm`], deduplicated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantSet(BTreeSet<String>);

impl VariantSet {
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
}

impl IntoIterator for VariantSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

pub fn host_variants(host: &str) -> VariantSet {
    let mut forms: BTreeSet<String> = BTreeSet::new();
    forms.insert(host.to_string());
    forms.extend(HostForm::ALL.iter().map(|form| form.apply(host)));
    VariantSet(forms)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
