//! SOQL query discovery in normalized source text
//!
//! The scanner does not parse Apex. It normalizes the text (whitespace
//! collapsed, lowercased) and walks it with a monotone byte cursor looking
//! for `select ... from <object>` spans, absorbing nested relationship
//! subqueries up to the platform nesting cap.

use thiserror::Error;

/// Salesforce caps relationship-query nesting at five levels, so a candidate
/// query is extended through at most five `from` clauses.
pub const MAX_SUBQUERY_DEPTH: usize = 5;

/// Expected "nothing to do" outcomes from query extraction.
///
/// These are sentinels for the orchestrator, not faults: an Apex class with
/// no queries is a normal input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// The source text was empty.
    #[error("no source text to scan")]
    NoInputData,
    /// The source contained no `select` statement.
    #[error("no SOQL query found in source")]
    NoQueryFound,
}

/// A query span lifted from normalized source text, nested subqueries
/// included.
///
/// Invariant: exactly one top-level `select`/`from` pair; up to four more
/// nested pairs may follow inside parenthesized subqueries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawQuery {
    /// Normalized query text, `select` through the target object name.
    pub text: String,
}

impl RawQuery {
    /// Number of `select` tokens in the query, nested subqueries included.
    pub fn select_count(&self) -> usize {
        count_select(&self.text)
    }

    /// Whether the query carries at least one relationship subquery.
    pub fn has_subquery(&self) -> bool {
        self.select_count() > 1
    }
}

/// Count `select` occurrences in already-lowercased text.
pub(crate) fn count_select(text: &str) -> usize {
    text.matches("select").count()
}

/// Collapse runs of whitespace (including line breaks) to single spaces.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Normalize source for scanning: whitespace collapsed, everything
/// lowercased. Original casing is lost here; synthesis re-derives object
/// casing on its own.
fn normalize(source: &str) -> String {
    collapse_whitespace(source).to_lowercase()
}

/// Strip the punctuation that clings to a captured object token, e.g. the
/// `];` of `... from Account];`.
fn scrub_api_name(token: &str) -> String {
    token
        .chars()
        .filter(|c| {
            !matches!(
                c,
                '.' | ';' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']'
                    | '\\'
            )
        })
        .collect()
}

/// End of the whitespace-delimited token starting at `from` (byte offset).
fn token_end(text: &str, from: usize) -> usize {
    text[from..].find(' ').map(|i| from + i).unwrap_or(text.len())
}

/// Byte offset just past the single separator character following a `from`
/// keyword that ends at `from_end`.
fn past_separator(text: &str, from_end: usize) -> usize {
    from_end
        + text[from_end..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(0)
}

/// Scan source text for every `select ... from <object>` span, in order of
/// appearance.
///
/// Candidates that contain nested subqueries are extended clause by clause
/// until their `select` count is accounted for, with at most
/// [`MAX_SUBQUERY_DEPTH`] extension steps. The cursor only moves forward.
pub fn extract_queries(source: &str) -> Result<Vec<RawQuery>, ExtractError> {
    if source.is_empty() {
        return Err(ExtractError::NoInputData);
    }

    let text = normalize(source);
    let mut queries = Vec::new();
    let mut cursor = 0;

    // The trailing space keeps identifiers like `selected` from matching.
    while let Some(found) = text[cursor..].find("select ") {
        let start = cursor + found;
        let Some(from_at) = text[start..].find("from") else {
            break;
        };

        // Head: select through `from` plus the separator character after it,
        // then the whitespace-delimited object token.
        let mut end = past_separator(&text, start + from_at + 4);
        end = token_end(&text, end);

        // Absorb nested subqueries: each extension pulls in the next `from`
        // clause and its object token.
        let mut extensions = 0;
        while extensions < MAX_SUBQUERY_DEPTH
            && count_select(&text[start..end]) > extensions + 1
        {
            let Some(next_from) = text[end..].find("from") else {
                break;
            };
            end = past_separator(&text, end + next_from + 4);
            end = token_end(&text, end);
            extensions += 1;
        }

        cursor = end;

        let candidate = text[start..end].trim();
        let Some((head, tail)) = candidate.rsplit_once(' ') else {
            continue;
        };
        let api_name = scrub_api_name(tail);
        queries.push(RawQuery {
            text: format!("{head} {api_name}"),
        });
    }

    if queries.is_empty() {
        return Err(ExtractError::NoQueryFound);
    }
    Ok(queries)
}
