//! Code listing with window chrome, line numbers, and keyword colorizing.
//!
//! The colorizer is not a parser. Each line splits on single spaces and each
//! token is checked against fixed keyword/type lists; anything unmatched
//! stays plain. A partial token like `VALUES(` therefore renders uncolored,
//! which is fine - this is decoration, not syntax analysis.

use leptos::prelude::*;
use talenthub_content::Icon as IconId;

use super::Icon;

/// SQL keywords painted bright.
const SQL_KEYWORDS: &[&str] = &[
    "CREATE", "TABLE", "INSERT", "INTO", "VALUES", "SELECT", "FROM", "WHERE", "UPDATE", "SET",
    "DELETE", "PRIMARY", "KEY", "FOREIGN", "REFERENCES", "NOT", "NULL", "DEFAULT", "JOIN", "ON",
    "AS", "AND", "OR",
];

/// Column types painted dim italic.
const SQL_TYPES: &[&str] = &["INTEGER", "VARCHAR(191)", "DATETIME(3)", "DOUBLE", "JSON"];

/// Cosmetic class of one whitespace-delimited token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Keyword,
    Type,
    Literal,
    Plain,
}

/// Classify a token by membership in the fixed lists (case-insensitive) or a
/// leading single quote.
pub(crate) fn classify_token(token: &str) -> TokenKind {
    let upper = token.to_ascii_uppercase();
    if SQL_KEYWORDS.contains(&upper.as_str()) {
        TokenKind::Keyword
    } else if SQL_TYPES.contains(&upper.as_str()) {
        TokenKind::Type
    } else if token.starts_with('\'') {
        TokenKind::Literal
    } else {
        TokenKind::Plain
    }
}

fn token_class(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Keyword => "tok tok-keyword",
        TokenKind::Type => "tok tok-type",
        TokenKind::Literal => "tok tok-literal",
        TokenKind::Plain => "tok",
    }
}

/// A titled code listing styled as a terminal window.
#[component]
pub fn CodeBlock(title: &'static str, code: &'static str) -> impl IntoView {
    view! {
        <div class="code-block">
            <div class="code-block-head">
                <div class="code-block-name">
                    <Icon icon=IconId::Terminal size="14" />
                    <span>{title}</span>
                </div>
                <div class="code-block-dots">
                    <span class="code-dot"></span>
                    <span class="code-dot"></span>
                    <span class="code-dot"></span>
                </div>
            </div>
            <pre class="code-block-body">
                {code
                    .lines()
                    .enumerate()
                    .map(|(i, line)| {
                        view! {
                            <div class="code-line">
                                <span class="code-line-no">{i + 1}</span>
                                <span class="code-line-text">
                                    {line
                                        .split(' ')
                                        .map(|token| {
                                            view! {
                                                <span class=token_class(classify_token(token))>{token}</span>
                                            }
                                        })
                                        .collect_view()}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </pre>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keywords_match_case_insensitively() {
        assert_eq!(classify_token("CREATE"), TokenKind::Keyword);
        assert_eq!(classify_token("create"), TokenKind::Keyword);
        assert_eq!(classify_token("Where"), TokenKind::Keyword);
    }

    #[test]
    fn types_and_literals_are_recognized() {
        assert_eq!(classify_token("VARCHAR(191)"), TokenKind::Type);
        assert_eq!(classify_token("json"), TokenKind::Type);
        assert_eq!(classify_token("'Jane"), TokenKind::Literal);
        assert_eq!(classify_token("'qualified',"), TokenKind::Literal);
    }

    #[test]
    fn partial_tokens_fall_through_to_plain() {
        // split on single spaces leaves punctuation attached
        assert_eq!(classify_token("VALUES("), TokenKind::Plain);
        assert_eq!(classify_token("candidates;"), TokenKind::Plain);
        assert_eq!(classify_token(""), TokenKind::Plain);
    }

    #[test]
    fn identifiers_stay_plain() {
        assert_eq!(classify_token("candidates"), TokenKind::Plain);
        assert_eq!(classify_token("skillName"), TokenKind::Plain);
    }
}
