//! Per-object field aggregation
//!
//! Flat queries are reduced to one record per distinct target object holding
//! the deduplicated set of projected field names. The accumulation structure
//! is built and returned per call; nothing is shared between invocations.

use std::collections::HashSet;

use crate::comments::strip_comments;
use crate::extract::{collapse_whitespace, extract_queries, ExtractError};
use crate::subquery::{flatten_queries, FlatQuery};

/// The deduplicated, lowercase field names referenced across all flat
/// queries targeting one object.
///
/// Field order follows first occurrence across the queries; object sets come
/// out in first-insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "wasm", serde(rename_all = "camelCase"))]
pub struct ObjectFieldSet {
    /// Lowercased object API name.
    pub object_name: String,
    /// Ordered set of lowercased field names.
    pub fields: Vec<String>,
}

impl ObjectFieldSet {
    /// Whether `field` (already lowercased) was referenced in any query
    /// against this object.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Remove the first standalone (word-boundary delimited) occurrence of
/// `word` from `text`.
fn remove_first_word(text: &str, word: &str) -> String {
    if word.is_empty() {
        return text.to_string();
    }
    let bytes = text.as_bytes();
    let mut search = 0;
    while let Some(found) = text[search..].find(word) {
        let at = search + found;
        let end = at + word.len();
        let left_ok = at == 0 || !is_word_byte(bytes[at - 1]);
        let right_ok = end == text.len() || !is_word_byte(bytes[end]);
        if left_ok && right_ok {
            let mut out = String::with_capacity(text.len() - word.len());
            out.push_str(&text[..at]);
            out.push_str(&text[end..]);
            return out;
        }
        // step past the first char of this failed match
        search = at
            + word
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(1);
    }
    text.to_string()
}

/// Pull the target object name and projected field names out of one flat
/// query.
fn parse_flat_query(query: &FlatQuery) -> Option<(String, Vec<String>)> {
    let object_name = query.object_name()?;

    let without_keywords = query.text.replace("select", "").replace("from", "");
    let without_object = remove_first_word(&without_keywords, &object_name);
    let fields = collapse_whitespace(&without_object)
        .split(',')
        .filter(|token| token.len() > 1)
        .map(|token| {
            token
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '\'')
                .collect::<String>()
        })
        .filter(|field| !field.is_empty())
        .collect();

    Some((object_name, fields))
}

/// Group projected fields by target object across every flat query.
///
/// The same object appearing in several queries accumulates into one set;
/// duplicates keep their first occurrence.
pub fn aggregate_fields(queries: &[FlatQuery]) -> Vec<ObjectFieldSet> {
    let mut sets: Vec<ObjectFieldSet> = Vec::new();
    for query in queries {
        let Some((object_name, fields)) = parse_flat_query(query) else {
            continue;
        };
        match sets.iter_mut().find(|s| s.object_name == object_name) {
            Some(set) => set.fields.extend(fields),
            None => sets.push(ObjectFieldSet {
                object_name,
                fields,
            }),
        }
    }

    for set in &mut sets {
        let mut seen = HashSet::new();
        set.fields.retain(|field| seen.insert(field.clone()));
    }
    sets
}

/// Run the whole extraction side of the pipeline: strip comments, discover
/// queries, flatten subqueries, and aggregate fields per object.
///
/// This is the first entry point an orchestrator calls; the result feeds
/// field classification and test-data synthesis.
pub fn extract_and_aggregate(source: &str) -> Result<Vec<ObjectFieldSet>, ExtractError> {
    let stripped = strip_comments(source).ok_or(ExtractError::NoInputData)?;
    let raw = extract_queries(&stripped)?;
    let flat = flatten_queries(&raw);
    Ok(aggregate_fields(&flat))
}
