//! The translation module resolves display labels and hints for connector
//! properties.
//!
//! Catalog keys are deterministic: the category id and property name are
//! camel-cased and joined into a dotted key, so the same property always
//! resolves through the same entry no matter how the server spells its
//! display name.  When the catalog has no entry, the server-reported display
//! name is returned unchanged.  Loading catalog resources (locale files,
//! bundles) is the embedding application's concern.

use std::collections::HashMap;

/// Read-only source of translated UI strings.  Implementations are expected
/// to be cheap to query; resolution asks `exists` before `get`.
pub trait TranslationProvider {
    /// Returns whether a translation exists for the given key.
    fn exists(&self, key: &str) -> bool;

    /// Retrieve the translation for the given key.
    fn get(&self, key: &str) -> Option<String>;
}

/// Camel-case a dotted or hyphenated name: "account-recovery" becomes
/// "accountRecovery", "EmailVerification.Enable" becomes
/// "emailVerificationEnable".  Tokens keep their interior casing; only the
/// leading character of each token changes.
pub fn camel_case<S: AsRef<str>>(input: S) -> String {
    let mut output = String::with_capacity(input.as_ref().len());
    let tokens = input
        .as_ref()
        .split(|c: char| c == '.' || c == '-' || c == '_' || c.is_whitespace())
        .filter(|token| !token.is_empty());

    for (position, token) in tokens.enumerate() {
        let mut chars = token.chars();
        // Tokens are non-empty, so next() always yields here.
        if let Some(first) = chars.next() {
            if position == 0 {
                output.extend(first.to_lowercase());
            } else {
                output.extend(first.to_uppercase());
            }
            output.push_str(chars.as_str());
        }
    }
    output
}

/// Catalog key for a property's form label.
pub fn label_key(category_id: &str, property_name: &str) -> String {
    lookup_key(category_id, property_name, "label")
}

/// Catalog key for a property's hint text.
pub fn hint_key(category_id: &str, property_name: &str) -> String {
    lookup_key(category_id, property_name, "hint")
}

fn lookup_key(category_id: &str, property_name: &str, facet: &str) -> String {
    format!(
        "governanceConnectors.{}.properties.{}.{}",
        camel_case(category_id),
        camel_case(property_name),
        facet
    )
}

/// Resolve the form label for a property, falling back to the
/// server-reported display name when the catalog has no entry.
pub fn resolve_label<T>(
    provider: &T,
    category_id: &str,
    property_name: &str,
    fallback: &str,
) -> String
where
    T: TranslationProvider,
{
    resolve(provider, &label_key(category_id, property_name), fallback)
}

/// Resolve the hint text for a property, falling back to the server-reported
/// description when the catalog has no entry.
pub fn resolve_hint<T>(
    provider: &T,
    category_id: &str,
    property_name: &str,
    fallback: &str,
) -> String
where
    T: TranslationProvider,
{
    resolve(provider, &hint_key(category_id, property_name), fallback)
}

fn resolve<T: TranslationProvider>(provider: &T, key: &str, fallback: &str) -> String {
    if provider.exists(key) {
        if let Some(translated) = provider.get(key) {
            trace!("Resolved '{}' from catalog", key);
            return translated;
        }
    }
    trace!("No catalog entry for '{}', using fallback", key);
    fallback.to_string()
}

/// A TranslationProvider backed by an in-memory map, for embedding a fixed
/// catalog or for tests.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    entries: HashMap<String, String>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<S1, S2>(&mut self, key: S1, value: S2)
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
    {
        self.entries
            .insert(key.as_ref().to_string(), value.as_ref().to_string());
    }
}

impl TranslationProvider for StaticCatalog {
    fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
