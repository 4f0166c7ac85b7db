//! Relationship-subquery separation
//!
//! A raw query carrying parenthesized child queries is split into
//! independent flat queries. The child's relationship alias is rewritten to
//! the object API name it stands for, so the aggregator downstream only ever
//! sees `select ... from <object>` shapes.

use std::ops::Range;

use crate::extract::{count_select, RawQuery};

/// A query with exactly one `select`/`from` pair, ending in a resolved
/// object API name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatQuery {
    /// Normalized query text.
    pub text: String,
}

impl FlatQuery {
    /// Target object API name: the last whitespace-delimited token with
    /// quote characters stripped.
    pub fn object_name(&self) -> Option<String> {
        let token = self.text.split_whitespace().last()?;
        let name: String = token.chars().filter(|c| *c != '\'').collect();
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// One parenthesized child query peeled out of a parent.
struct PeeledChild {
    /// Child query rewritten as `select ... from <object>`.
    child: String,
    /// Byte range of the `(...)` span in the parent text.
    span: Range<usize>,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Resolve a child relationship alias to an object API name.
///
/// A narrow heuristic, kept deliberately: a trailing `s` is a plural
/// (`contacts` -> `contact`), and a trailing `r` is a custom relationship
/// suffix whose backing object ends in `c` (`items__r` -> `items__c`).
/// Anything else is used as-is.
fn resolve_alias(alias: &str) -> String {
    match alias.chars().last() {
        Some('s') => alias[..alias.len() - 1].to_string(),
        Some('r') => format!("{}c", &alias[..alias.len() - 1]),
        _ => alias.to_string(),
    }
}

/// Find the relationship alias inside a subquery span: the first `from`
/// that is followed by whitespace and a word.
fn find_alias(inner: &str) -> Option<(usize, usize)> {
    let mut search = 0;
    while let Some(found) = inner[search..].find("from") {
        let from_end = search + found + 4;
        let rest = &inner[from_end..];
        let trimmed = rest.trim_start();
        let gap = rest.len() - trimmed.len();
        if gap > 0 {
            let word_len = trimmed
                .find(|c: char| !is_word_char(c))
                .unwrap_or(trimmed.len());
            if word_len > 0 {
                let word_start = from_end + gap;
                return Some((word_start, word_start + word_len));
            }
        }
        search = from_end;
    }
    None
}

/// Peel the first parenthesized subquery out of `text`, if any.
fn peel_first_subquery(text: &str) -> Option<PeeledChild> {
    let open = text.find('(')?;
    let close = text.find(')')?;
    if close < open {
        return None;
    }

    let inner = &text[open + 1..close];
    let (word_start, word_end) = find_alias(inner)?;
    let alias = &inner[word_start..word_end];
    let projection = inner[..word_start].trim();

    Some(PeeledChild {
        child: format!("{} {}", projection, resolve_alias(alias)),
        span: open..close + 1,
    })
}

/// Split every raw query into flat queries.
///
/// Children come out before their parent, and the parent is re-emitted with
/// all subquery spans removed. Queries that are already flat pass through
/// unchanged.
pub fn flatten_queries(raw: &[RawQuery]) -> Vec<FlatQuery> {
    let mut flat = Vec::new();
    for query in raw {
        if !query.has_subquery() {
            flat.push(FlatQuery {
                text: query.text.clone(),
            });
            continue;
        }

        let mut remaining = query.text.clone();
        while count_select(&remaining) > 1 {
            let Some(peeled) = peel_first_subquery(&remaining) else {
                break;
            };
            flat.push(FlatQuery { text: peeled.child });
            remaining.replace_range(peeled.span, "");
        }
        flat.push(FlatQuery { text: remaining });
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(text: &str) -> RawQuery {
        RawQuery {
            text: text.to_string(),
        }
    }

    #[test]
    fn alias_resolution_rules() {
        assert_eq!(resolve_alias("contacts"), "contact");
        assert_eq!(resolve_alias("cases"), "case");
        assert_eq!(resolve_alias("line_items__r"), "line_items__c");
        assert_eq!(resolve_alias("contact"), "contact");
    }

    #[test]
    fn flat_query_passes_through() {
        let flat = flatten_queries(&[raw("select id from account")]);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].text, "select id from account");
        assert_eq!(flat[0].object_name().unwrap(), "account");
    }

    #[test]
    fn single_subquery_is_peeled() {
        let flat = flatten_queries(&[raw(
            "select id, (select id from contacts) from account",
        )]);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].text, "select id from contact");
        assert_eq!(flat[1].text, "select id,  from account");
        assert_eq!(flat[1].object_name().unwrap(), "account");
    }

    #[test]
    fn sibling_subqueries_each_become_flat() {
        let flat = flatten_queries(&[raw(
            "select id, (select id from contacts), (select subject from cases) from account",
        )]);
        assert_eq!(flat.len(), 3);
        assert_eq!(flat[0].text, "select id from contact");
        assert_eq!(flat[1].text, "select subject from case");
        assert_eq!(flat[2].object_name().unwrap(), "account");
    }

    #[test]
    fn custom_relationship_resolves_to_custom_object() {
        let flat = flatten_queries(&[raw(
            "select id, (select id from order_lines__r) from order__c",
        )]);
        assert_eq!(flat[0].text, "select id from order_lines__c");
    }

    #[test]
    fn object_name_strips_quotes() {
        let query = FlatQuery {
            text: "select id from account'".to_string(),
        };
        assert_eq!(query.object_name().unwrap(), "account");
    }
}
