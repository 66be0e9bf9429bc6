//! Content catalog
//!
//! Static table of the content types schools must (or are recommended to)
//! publish online. Each entry carries everything the prompt builder needs,
//! including the statutory reference, so there is a single key set to keep in
//! sync.

mod entries;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::warn;

/// Content type used when a caller asks for an id the catalog does not know
pub const DEFAULT_CONTENT_TYPE: &str = "curriculum";

/// Citation used when an id has no statutory reference of its own
pub const GENERIC_STATUTORY_REFERENCE: &str =
    "Relevant education legislation and statutory guidance";

/// Everything the prompt needs to know about one kind of document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentTypeSpec {
    pub id: &'static str,
    pub title: &'static str,
    /// Purpose sentence
    pub description: &'static str,
    /// Required subsections, in the order the document should present them
    pub key_sections: &'static [&'static str],
    /// What gov.uk guidance requires of this document
    pub gov_requirement: &'static str,
    pub quality_criteria: &'static str,
    /// Legislation the document answers to
    pub statutory_reference: &'static str,
}

impl ContentTypeSpec {
    /// Key sections as they appear in the prompt
    pub fn key_sections_text(&self) -> String {
        self.key_sections.join(", ")
    }
}

static CATALOG: Lazy<IndexMap<&'static str, &'static ContentTypeSpec>> =
    Lazy::new(|| entries::ENTRIES.iter().map(|spec| (spec.id, spec)).collect());

/// Strict lookup; `None` for unknown ids
pub fn get(content_type_id: &str) -> Option<&'static ContentTypeSpec> {
    CATALOG.get(content_type_id).copied()
}

/// Total lookup: unknown ids resolve to the [`DEFAULT_CONTENT_TYPE`] entry
pub fn lookup(content_type_id: &str) -> &'static ContentTypeSpec {
    if let Some(spec) = get(content_type_id) {
        return spec;
    }

    warn!(
        requested = content_type_id,
        fallback = DEFAULT_CONTENT_TYPE,
        "Unknown content type; using default catalog entry"
    );
    default_spec()
}

/// Statutory reference for an id, or [`GENERIC_STATUTORY_REFERENCE`]
pub fn statutory_reference_for(content_type_id: &str) -> &'static str {
    get(content_type_id)
        .map(|spec| spec.statutory_reference)
        .unwrap_or(GENERIC_STATUTORY_REFERENCE)
}

pub fn contains(content_type_id: &str) -> bool {
    CATALOG.contains_key(content_type_id)
}

/// All entries in catalog order
pub fn all() -> impl Iterator<Item = &'static ContentTypeSpec> {
    entries::ENTRIES.iter()
}

pub fn ids() -> impl Iterator<Item = &'static str> {
    all().map(|spec| spec.id)
}

pub fn len() -> usize {
    entries::ENTRIES.len()
}

fn default_spec() -> &'static ContentTypeSpec {
    // curriculum sits at index 3 of ENTRIES
    CATALOG
        .get(DEFAULT_CONTENT_TYPE)
        .copied()
        .unwrap_or(&entries::ENTRIES[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_entry_is_curriculum() {
        assert_eq!(default_spec().id, DEFAULT_CONTENT_TYPE);
        assert_eq!(entries::ENTRIES[3].id, DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn key_sections_keep_embedded_commas() {
        let finance = lookup("financial_info");
        assert_eq!(finance.key_sections.len(), 3);
        assert!(
            finance
                .key_sections_text()
                .starts_with("High-earning staff counts (by £10,000 bandings), Link")
        );
    }
}
