use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, TemplateError};

/// An anchored token grammar the cursor can consume.
///
/// Rules with a capture group yield the group instead of the full span
/// (used for the quoted name literal).
pub struct TokenRule {
    name: &'static str,
    regex: Regex,
}

impl TokenRule {
    fn new(name: &'static str, pattern: &str) -> TokenRule {
        TokenRule {
            name,
            regex: Regex::new(pattern).expect("valid regex"),
        }
    }
}

/// `"..."`, yielding the text between the quotes.
pub fn quoted_literal() -> &'static TokenRule {
    static RULE: OnceLock<TokenRule> = OnceLock::new();
    RULE.get_or_init(|| TokenRule::new("quoted name pattern", r#"\A"([^"]+)""#))
}

/// A dotted class name (`java.util.Map$Entry`).
pub fn class_name() -> &'static TokenRule {
    static RULE: OnceLock<TokenRule> = OnceLock::new();
    RULE.get_or_init(|| TokenRule::new("class name", r"\A[a-zA-Z0-9_.$]+"))
}

/// A bare identifier (method name or modifier keyword).
pub fn identifier() -> &'static TokenRule {
    static RULE: OnceLock<TokenRule> = OnceLock::new();
    RULE.get_or_init(|| TokenRule::new("identifier", r"\A[a-zA-Z0-9_]+"))
}

/// A type word, optionally carrying `[]` suffix groups.
pub fn type_token() -> &'static TokenRule {
    static RULE: OnceLock<TokenRule> = OnceLock::new();
    RULE.get_or_init(|| TokenRule::new("type name", r"\A[a-zA-Z0-9_.$\[\]]+"))
}

const WHITESPACE: &[char] = &[' ', '\r', '\t', '\n'];

/// Positional scanner over a template string.
///
/// The offset only ever moves forward; every consuming operation first skips
/// whitespace and fails with [`TemplateError::UnexpectedEof`] if the input is
/// exhausted.
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Cursor<'a> {
        Cursor { input, pos: 0 }
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The unconsumed remainder, whitespace included.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) -> Result<()> {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start_matches(WHITESPACE).len();
        if self.pos >= self.input.len() {
            return Err(TemplateError::UnexpectedEof);
        }
        Ok(())
    }

    /// Next non-whitespace character, without consuming it.
    pub fn peek_char(&mut self) -> Result<char> {
        self.skip_whitespace()?;
        self.remaining()
            .chars()
            .next()
            .ok_or(TemplateError::UnexpectedEof)
    }

    /// Consume `rule` starting exactly at the current offset.
    pub fn consume_token(&mut self, rule: &TokenRule) -> Result<&'a str> {
        self.skip_whitespace()?;
        let rest = self.remaining();
        let Some(caps) = rule.regex.captures(rest) else {
            return Err(self.syntax_error(rule.name));
        };
        let full = caps.get(0).ok_or(TemplateError::UnexpectedEof)?;
        self.pos += full.end();
        match caps.get(1) {
            Some(group) => Ok(&rest[group.range()]),
            None => Ok(&rest[full.range()]),
        }
    }

    /// Consume the next character iff it equals `c`.
    pub fn consume_if_char(&mut self, c: char) -> Result<bool> {
        self.skip_whitespace()?;
        if self.remaining().starts_with(c) {
            self.pos += c.len_utf8();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Require `c` next, with a syntax error naming it otherwise.
    pub fn expect_char(&mut self, c: char) -> Result<()> {
        if self.consume_if_char(c)? {
            Ok(())
        } else {
            Err(self.syntax_error(&format!("'{c}'")))
        }
    }

    pub(crate) fn syntax_error(&self, expected: &str) -> TemplateError {
        TemplateError::Syntax {
            expected: expected.to_owned(),
            offset: self.pos,
            remainder: self.remaining().to_owned(),
        }
    }
}
