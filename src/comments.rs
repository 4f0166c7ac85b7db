//! Comment stripping for Apex source text
//!
//! SOQL extraction works on raw text, so comments must be removed up front or
//! a query inside a commented-out block would be harvested like live code.

use logos::Logos;

/// Just enough lexical structure to find comments. String literals are
/// matched as a unit so `//` or `/*` inside a quoted string is kept.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    BlockComment,

    #[regex(r"'(?:\\.|[^'\\\n])*'")]
    StringLiteral,

    #[regex(r"[^/']+")]
    Text,

    // Lone markers that start neither a comment nor a string
    #[token("/")]
    Slash,
    #[token("'")]
    Quote,
}

/// Remove every `//...` line comment and every terminated `/*...*/` block
/// comment from `source`.
///
/// Returns `None` for empty input (nothing to process). The newline that
/// terminates a line comment is kept; an unterminated `/*` with no closing
/// `*/` is left in place untouched.
pub fn strip_comments(source: &str) -> Option<String> {
    if source.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(source.len());
    let mut lexer = Chunk::lexer(source);
    while let Some(chunk) = lexer.next() {
        match chunk {
            Ok(Chunk::LineComment) | Ok(Chunk::BlockComment) => {}
            // Everything else, including lexer errors, passes through verbatim
            _ => out.push_str(lexer.slice()),
        }
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_a_sentinel() {
        assert_eq!(strip_comments(""), None);
    }

    #[test]
    fn strips_line_comments() {
        let source = "Integer a = 1; // trailing note\nInteger b = 2;";
        assert_eq!(
            strip_comments(source).unwrap(),
            "Integer a = 1; \nInteger b = 2;"
        );
    }

    #[test]
    fn strips_block_comments() {
        let source = "Integer a = 1; /* one\n two */ Integer b = 2;";
        assert_eq!(
            strip_comments(source).unwrap(),
            "Integer a = 1;  Integer b = 2;"
        );
    }

    #[test]
    fn strips_adjacent_comment_kinds() {
        let source = "/* head */// tail\nreal();";
        assert_eq!(strip_comments(source).unwrap(), "\nreal();");
    }

    #[test]
    fn keeps_markers_inside_string_literals() {
        let source = "String url = 'https://example.com'; // real comment";
        assert_eq!(
            strip_comments(source).unwrap(),
            "String url = 'https://example.com'; "
        );
    }

    #[test]
    fn keeps_unterminated_block_comment() {
        let source = "Integer a; /* never closed";
        assert_eq!(strip_comments(source).unwrap(), source);
    }

    #[test]
    fn line_comment_at_end_of_input() {
        assert_eq!(strip_comments("x = 1; // no newline").unwrap(), "x = 1; ");
    }

    #[test]
    fn comment_hiding_a_query_is_removed() {
        let source = "// [SELECT Id FROM Account]\nreturn null;";
        assert_eq!(strip_comments(source).unwrap(), "\nreturn null;");
    }
}
