//! Recursive descent parser for the ICU message dialect.
//!
//! The grammar is small enough that a hand-written cursor over the input is
//! clearer than a grammar framework: literal text with apostrophe quoting,
//! `{...}` placeholders, and `<tag>...</tag>` pairs. Branch bodies recurse
//! into the same element parser, so plural/select/tag contents nest freely.

use super::{Branch, MessageElement, ParseMessageError};

/// What ends the current element sequence.
#[derive(Debug, Clone, Copy)]
enum Terminator<'t> {
    /// End of the whole message.
    Eof,
    /// A `}` closing a branch body; left for the caller to consume.
    Brace,
    /// A `</...` closing the named tag; left for the caller to consume.
    Tag(&'t str),
}

pub(super) struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub(super) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub(super) fn parse_message(mut self) -> Result<Vec<MessageElement>, ParseMessageError> {
        self.parse_elements(Terminator::Eof)
    }

    fn parse_elements(
        &mut self,
        terminator: Terminator<'_>,
    ) -> Result<Vec<MessageElement>, ParseMessageError> {
        let mut elements = Vec::new();

        loop {
            match self.peek() {
                None => match terminator {
                    Terminator::Eof => break,
                    Terminator::Brace => {
                        return Err(self.error("unterminated branch, expected `}`"));
                    }
                    Terminator::Tag(name) => {
                        return Err(self.error(format!("unterminated tag, expected `</{name}>`")));
                    }
                },
                Some('}') if matches!(terminator, Terminator::Brace) => break,
                Some('{') => elements.push(self.parse_placeholder()?),
                Some('<') if self.closing_tag_ahead() => match terminator {
                    Terminator::Tag(_) => break,
                    _ => return Err(self.error("unmatched closing tag")),
                },
                Some('<') if self.opening_tag_ahead() => elements.push(self.parse_tag()?),
                Some(_) => {
                    let text = self.parse_text(terminator);
                    elements.push(MessageElement::Text(text));
                }
            }
        }

        Ok(elements)
    }

    /// Literal text up to the next placeholder, tag, or terminator.
    ///
    /// Apostrophe handling follows ICU quoting: `''` is a literal apostrophe,
    /// an apostrophe before a syntax character opens a quoted run (ended by
    /// the next lone apostrophe, or the end of the message), and any other
    /// apostrophe is literal.
    fn parse_text(&mut self, terminator: Terminator<'_>) -> String {
        let mut text = String::new();

        while let Some(c) = self.peek() {
            match c {
                '{' => break,
                '}' if matches!(terminator, Terminator::Brace) => break,
                '<' if self.closing_tag_ahead() || self.opening_tag_ahead() => break,
                '\'' => {
                    self.bump();
                    self.parse_quoted(&mut text);
                }
                _ => {
                    text.push(c);
                    self.bump();
                }
            }
        }

        text
    }

    fn parse_quoted(&mut self, text: &mut String) {
        match self.peek() {
            Some('\'') => {
                self.bump();
                text.push('\'');
            }
            Some(c) if is_syntax_char(c) => loop {
                match self.bump() {
                    None => return,
                    Some('\'') => {
                        if self.peek() == Some('\'') {
                            self.bump();
                            text.push('\'');
                        } else {
                            return;
                        }
                    }
                    Some(c) => text.push(c),
                }
            },
            _ => text.push('\''),
        }
    }

    fn parse_placeholder(&mut self) -> Result<MessageElement, ParseMessageError> {
        self.bump(); // `{`
        self.skip_whitespace();
        let name = self.parse_identifier("argument name")?;
        self.skip_whitespace();

        match self.peek() {
            Some('}') => {
                self.bump();
                Ok(MessageElement::Argument { name })
            }
            Some(',') => {
                self.bump();
                self.skip_whitespace();
                let keyword = self.parse_identifier("format type")?;
                match keyword.as_str() {
                    "number" => {
                        let style = self.parse_style()?;
                        Ok(MessageElement::Number { name, style })
                    }
                    "date" => {
                        let style = self.parse_style()?;
                        Ok(MessageElement::Date { name, style })
                    }
                    "plural" => {
                        self.expect(',')?;
                        let branches = self.parse_branches(true)?;
                        Ok(MessageElement::Plural { name, branches })
                    }
                    "select" => {
                        self.expect(',')?;
                        let branches = self.parse_branches(false)?;
                        Ok(MessageElement::Select { name, branches })
                    }
                    other => Err(self.error(format!("unsupported format type `{other}`"))),
                }
            }
            Some(c) => Err(self.error(format!("expected `,` or `}}`, found `{c}`"))),
            None => Err(self.error("unterminated argument, expected `}`")),
        }
    }

    /// Optional `, style` after `number` or `date`, up to the closing `}`.
    fn parse_style(&mut self) -> Result<Option<String>, ParseMessageError> {
        self.skip_whitespace();
        match self.peek() {
            Some('}') => {
                self.bump();
                Ok(None)
            }
            Some(',') => {
                self.bump();
                let mut style = String::new();
                while let Some(c) = self.peek() {
                    if c == '}' {
                        break;
                    }
                    style.push(c);
                    self.bump();
                }
                if self.peek().is_none() {
                    return Err(self.error("unterminated argument, expected `}`"));
                }
                self.bump(); // `}`
                let style = style.trim();
                if style.is_empty() {
                    return Err(self.error("expected a format style after `,`"));
                }
                Ok(Some(style.to_string()))
            }
            Some(c) => Err(self.error(format!("expected `,` or `}}`, found `{c}`"))),
            None => Err(self.error("unterminated argument, expected `}`")),
        }
    }

    fn parse_branches(&mut self, plural: bool) -> Result<Vec<Branch>, ParseMessageError> {
        let mut branches = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('}') => {
                    self.bump();
                    break;
                }
                None => return Err(self.error("unterminated argument, expected `}`")),
                Some(_) => {}
            }

            // `offset:n` may precede plural branches; the extractor has no
            // use for it, so it is validated and skipped.
            if plural && branches.is_empty() && self.remaining().starts_with("offset:") {
                self.advance_bytes("offset:".len());
                self.skip_whitespace();
                if !matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                    return Err(self.error("expected a number after `offset:`"));
                }
                while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                    self.bump();
                }
                continue;
            }

            let selector = self.parse_selector(plural)?;
            self.skip_whitespace();
            if self.peek() != Some('{') {
                return Err(self.error(format!("expected `{{` after branch selector `{selector}`")));
            }
            self.bump();
            let elements = self.parse_elements(Terminator::Brace)?;
            self.bump(); // `}` left by the Brace terminator
            branches.push(Branch { selector, elements });
        }

        if branches.is_empty() {
            return Err(self.error("expected at least one branch"));
        }
        Ok(branches)
    }

    fn parse_selector(&mut self, plural: bool) -> Result<String, ParseMessageError> {
        if plural && self.peek() == Some('=') {
            self.bump();
            let start = self.pos;
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.bump();
            }
            if self.pos == start {
                return Err(self.error("expected a number after `=`"));
            }
            return Ok(format!("={}", &self.input[start..self.pos]));
        }
        self.parse_identifier("branch selector")
    }

    fn parse_tag(&mut self) -> Result<MessageElement, ParseMessageError> {
        self.bump(); // `<`
        let name = self.parse_identifier("tag name")?;
        self.skip_whitespace();

        if self.remaining().starts_with("/>") {
            self.advance_bytes(2);
            return Ok(MessageElement::Tag {
                name,
                children: Vec::new(),
            });
        }

        if self.peek() != Some('>') {
            return Err(self.error(format!("expected `>` in tag `<{name}>`")));
        }
        self.bump();

        let children = self.parse_elements(Terminator::Tag(&name))?;

        self.advance_bytes(2); // `</` left by the Tag terminator
        let closing = self.parse_identifier("closing tag name")?;
        if closing != name {
            return Err(self.error(format!(
                "mismatched closing tag `</{closing}>`, expected `</{name}>`"
            )));
        }
        self.skip_whitespace();
        if self.peek() != Some('>') {
            return Err(self.error(format!("expected `>` in tag `</{closing}>`")));
        }
        self.bump();

        Ok(MessageElement::Tag { name, children })
    }

    fn parse_identifier(&mut self, what: &str) -> Result<String, ParseMessageError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace() || is_syntax_char(c) || matches!(c, ',' | '/' | '=' | '\'') {
                break;
            }
            self.bump();
        }
        if self.pos == start {
            return Err(self.error(format!("expected {what}")));
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseMessageError> {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(self.error(format!("expected `{expected}`")))
        }
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn advance_bytes(&mut self, n: usize) {
        self.pos += n;
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn closing_tag_ahead(&self) -> bool {
        self.remaining().starts_with("</")
    }

    fn opening_tag_ahead(&self) -> bool {
        let bytes = self.remaining().as_bytes();
        bytes.len() >= 2 && bytes[0] == b'<' && bytes[1].is_ascii_alphabetic()
    }

    fn error(&self, message: impl Into<String>) -> ParseMessageError {
        ParseMessageError {
            offset: self.pos,
            message: message.into(),
        }
    }
}

fn is_syntax_char(c: char) -> bool {
    matches!(c, '{' | '}' | '<' | '>' | '#')
}
