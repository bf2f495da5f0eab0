//! Scanner implementation

use super::token::*;
use crate::fields::FieldTable;

/// Tokenize a query against a field table.
///
/// Never fails: spans that match no grammar rule come back as `FreeText`
/// tokens, so every input string has a token representation and
/// concatenating the tokens' `raw` fields reproduces the input exactly.
pub fn tokenize(query: &str, fields: &FieldTable) -> Vec<Token> {
    Tokenizer::new(query, fields).tokenize()
}

/// Single-pass scanner for the search query language.
pub struct Tokenizer<'a> {
    source: &'a str,
    fields: &'a FieldTable,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a new scanner over the given query.
    pub fn new(source: &'a str, fields: &'a FieldTable) -> Self {
        Self {
            source,
            fields,
            pos: 0,
        }
    }

    /// Tokenize the entire query into a vector of tokens.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();

        loop {
            // Leading whitespace rides on the token that follows it.
            let start = self.pos;
            self.skip_whitespace();

            if self.at_end() {
                if self.pos > start {
                    match tokens.last_mut() {
                        // Trailing whitespace extends the last token.
                        Some(last) => {
                            last.span.end = self.pos;
                            last.raw = self.source[last.span.start..self.pos].to_string();
                        }
                        // All-whitespace query.
                        None => tokens.push(Token {
                            kind: TokenKind::FreeText,
                            raw: self.source[start..self.pos].to_string(),
                            span: Span {
                                start,
                                end: self.pos,
                            },
                        }),
                    }
                }
                break;
            }

            let kind = self.next_kind();
            tokens.push(Token {
                kind,
                raw: self.source[start..self.pos].to_string(),
                span: Span {
                    start,
                    end: self.pos,
                },
            });
        }

        tokens
    }

    /// Scan one token starting at a non-whitespace position.
    ///
    /// Match precedence: parenthesis, boolean keyword, filter pattern,
    /// free text. Always consumes at least one character.
    fn next_kind(&mut self) -> TokenKind {
        let Some(c) = self.peek() else {
            return TokenKind::FreeText;
        };

        match c {
            '(' => {
                self.bump();
                TokenKind::OpenParen
            }
            ')' => {
                self.bump();
                TokenKind::CloseParen
            }
            _ => {
                if let Some(kind) = self.scan_boolean() {
                    return kind;
                }
                if let Some(filter) = self.scan_filter() {
                    return TokenKind::Filter(filter);
                }
                self.scan_free_text()
            }
        }
    }

    /// Scan `AND` / `OR` (case-insensitive, whole word only).
    fn scan_boolean(&mut self) -> Option<TokenKind> {
        let rest = &self.source[self.pos..];
        let end = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        let word = &rest[..end];

        // Must be a whole word: followed by whitespace, a paren, or EOF.
        let boundary = match rest[end..].chars().next() {
            None => true,
            Some(c) => c.is_whitespace() || c == '(' || c == ')',
        };
        if !boundary {
            return None;
        }

        let kind = if word.eq_ignore_ascii_case("and") {
            TokenKind::LogicalAnd
        } else if word.eq_ignore_ascii_case("or") {
            TokenKind::LogicalOr
        } else {
            return None;
        };
        self.pos += end;
        Some(kind)
    }

    /// Attempt to scan a `[!]?key[:operator]value` filter.
    ///
    /// Restores the scan position and returns `None` when the span is not
    /// a filter (no colon, empty key, empty value); the caller then falls
    /// back to free text.
    fn scan_filter(&mut self) -> Option<FilterToken> {
        let start = self.pos;

        let negated = if self.peek() == Some('!') {
            self.bump();
            true
        } else {
            false
        };

        let key_start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                self.bump();
            } else {
                break;
            }
        }
        let key_end = self.pos;

        if key_start == key_end || self.peek() != Some(':') {
            self.pos = start;
            return None;
        }
        self.bump(); // ':'

        let operator = self.scan_operator();

        let value = match self.peek() {
            Some('"') => Some(FilterValue::Single(self.scan_quoted())),
            Some('[') => Some(FilterValue::List(self.scan_list())),
            _ => {
                let value_start = self.pos;
                while let Some(c) = self.peek() {
                    if c.is_whitespace() || c == '(' || c == ')' {
                        break;
                    }
                    self.bump();
                }
                if self.pos == value_start {
                    None
                } else {
                    Some(FilterValue::Single(
                        self.source[value_start..self.pos].to_string(),
                    ))
                }
            }
        };

        let Some(value) = value else {
            // `key:` with nothing after the colon is not a filter.
            self.pos = start;
            return None;
        };

        let key = self.source[key_start..key_end].to_string();
        let value_type = self.fields.resolve(&key);
        Some(FilterToken {
            key,
            negated,
            operator,
            value,
            value_type,
        })
    }

    /// Scan the optional comparison operator after the colon.
    fn scan_operator(&mut self) -> FilterOperator {
        let rest = &self.source[self.pos..];
        let (operator, len) = if rest.starts_with("!=") {
            (FilterOperator::NotEqual, 2)
        } else if rest.starts_with(">=") {
            (FilterOperator::GreaterThanOrEqual, 2)
        } else if rest.starts_with("<=") {
            (FilterOperator::LessThanOrEqual, 2)
        } else if rest.starts_with('>') {
            (FilterOperator::GreaterThan, 1)
        } else if rest.starts_with('<') {
            (FilterOperator::LessThan, 1)
        } else if rest.starts_with('=') {
            (FilterOperator::Equal, 1)
        } else {
            (FilterOperator::Equal, 0)
        };
        self.pos += len;
        operator
    }

    /// Scan a quoted value, returning the unescaped content.
    ///
    /// Consumes greedily to the next unescaped quote; an unterminated
    /// quote consumes to end of input (recovery, not failure).
    fn scan_quoted(&mut self) -> String {
        self.bump(); // opening quote
        let mut value = String::new();

        loop {
            match self.peek() {
                None => break,
                Some('"') => {
                    self.bump();
                    break;
                }
                Some('\\') => {
                    self.bump();
                    match self.peek() {
                        Some('"') => {
                            self.bump();
                            value.push('"');
                        }
                        Some('\\') => {
                            self.bump();
                            value.push('\\');
                        }
                        _ => value.push('\\'),
                    }
                }
                Some(c) => {
                    self.bump();
                    value.push(c);
                }
            }
        }

        value
    }

    /// Scan a bracketed `[a,b,c]` list value. Commas are the only
    /// delimiter; brackets do not nest. An unterminated list consumes to
    /// end of input.
    fn scan_list(&mut self) -> Vec<String> {
        self.bump(); // '['
        let mut items = Vec::new();
        let mut current = String::new();

        loop {
            match self.peek() {
                None => break,
                Some(']') => {
                    self.bump();
                    break;
                }
                Some(',') => {
                    self.bump();
                    items.push(current.trim().to_string());
                    current = String::new();
                }
                Some('"') => {
                    let quoted = self.scan_quoted();
                    current.push_str(&quoted);
                }
                Some(c) => {
                    self.bump();
                    current.push(c);
                }
            }
        }

        let current = current.trim();
        if !items.is_empty() || !current.is_empty() {
            items.push(current.to_string());
        }
        items
    }

    /// Consume a free-text run: either a quoted phrase or a run of
    /// non-whitespace, non-parenthesis characters.
    fn scan_free_text(&mut self) -> TokenKind {
        if self.peek() == Some('"') {
            self.scan_quoted();
            return TokenKind::FreeText;
        }

        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '(' || c == ')' {
                break;
            }
            self.bump();
        }
        TokenKind::FreeText
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
