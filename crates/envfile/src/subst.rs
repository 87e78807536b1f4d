//! Placeholder substitution.
//!
//! Replaces `{{ IDENTIFIER }}` tokens in a string with values from an
//! explicit set of bindings. Substitution is pure and never fails: an
//! unbound identifier degrades to the empty string, a deliberate permissive
//! policy favoring availability over strictness.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Token grammar: two opening braces, optional whitespace, one or more word
/// characters captured as the identifier, optional whitespace, two closing
/// braces. No nesting, no default-value syntax, no dotted paths.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is valid"));

/// Identifier-to-value bindings for placeholder substitution.
///
/// Bindings are an explicit parameter rather than implicit process-global
/// state: callers snapshot the environment once at the boundary (see
/// [`Bindings::from_process_env`]) and the substituter itself stays pure.
/// Insertion order is preserved, mainly so that diagnostics and tests are
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct Bindings(IndexMap<String, String>);

impl Bindings {
    /// Create an empty set of bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables with non-UTF-8 names or values are skipped; placeholder
    /// identifiers are `\w+` so they could never match anyway.
    #[must_use]
    pub fn from_process_env() -> Self {
        Self(
            std::env::vars_os()
                .filter_map(|(key, value)| {
                    Some((key.into_string().ok()?, value.into_string().ok()?))
                })
                .collect(),
        )
    }

    /// Insert or replace a binding.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a binding. Identifiers are case-sensitive.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Bindings {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

/// Replace every `{{ IDENTIFIER }}` token in `content` with its bound value.
///
/// Single left-to-right pass over non-overlapping matches. The whole token,
/// braces included, is replaced; unbound identifiers become the empty
/// string. Text outside matched tokens is copied through untouched, and
/// substituted values are not re-scanned, so a value containing `{{...}}`
/// text stays literal.
///
/// # Examples
///
/// ```
/// use daiku_envfile::{Bindings, substitute};
///
/// let bindings = Bindings::from([("HOST", "api.example.com")]);
/// assert_eq!(
///     substitute("URL={{HOST}}:{{PORT}}", &bindings),
///     "URL=api.example.com:"
/// );
/// ```
#[must_use]
pub fn substitute(content: &str, bindings: &Bindings) -> String {
    PLACEHOLDER
        .replace_all(content, |caps: &Captures<'_>| {
            // A match without the capture group cannot occur with this
            // pattern; degrade to empty rather than panic if it ever does.
            caps.get(1)
                .and_then(|ident| bindings.get(ident.as_str()))
                .unwrap_or_default()
                .to_string()
        })
        .into_owned()
}
