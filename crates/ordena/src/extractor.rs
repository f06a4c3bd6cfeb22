//! Declaration extraction
//!
//! Turns one scanned import statement into a normalized [`ImportRecord`],
//! plus the per-statement formatting signals (quote character, leading
//! indentation) the reconciler needs to regenerate it faithfully. Parsing
//! is a small token scan over the statement text alone; the scanner has
//! already decided where each statement starts and ends.

use anyhow::{Result, bail, ensure};

use crate::generator::QuoteStyle;
use crate::types::{Binding, ImportKind, ImportRecord, Span};

/// Formatting signals recovered from a statement's original text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementFormat {
    pub quote: QuoteStyle,
    pub indent: String,
}

/// Extract the record for the statement at `span`
///
/// A span outside the source unit is a caller contract violation, not a
/// recoverable condition: without a valid range the reconciler cannot
/// produce a replacement at all.
pub fn extract(source_text: &str, span: Span) -> Result<ImportRecord> {
    ensure!(
        span.start <= span.end && span.end <= source_text.len(),
        "statement span {}..{} is outside the source unit ({} bytes)",
        span.start,
        span.end,
        source_text.len(),
    );
    let original = &source_text[span.start..span.end];
    let tokens = tokenize(original)?;
    Parser::new(&tokens).parse_import(original, span)
}

/// Detect the quote character and indentation for the statement at `span`
///
/// Preferences are per statement, never per file: a block mixing quote
/// styles keeps each statement's own style through regeneration.
pub fn detect_format(source_text: &str, span: Span) -> StatementFormat {
    let original = &source_text[span.start..span.end];
    let quote = original
        .chars()
        .find(|&c| matches!(c, '\'' | '"'))
        .map_or(QuoteStyle::Single, |c| {
            if c == '\'' {
                QuoteStyle::Single
            } else {
                QuoteStyle::Double
            }
        });
    let line_start = source_text[..span.start].rfind('\n').map_or(0, |idx| idx + 1);
    StatementFormat {
        quote,
        indent: source_text[line_start..span.start].to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ident(String),
    Str(String),
    LBrace,
    RBrace,
    Comma,
    Star,
    Semi,
}

fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        match ch {
            c if c.is_whitespace() => {}
            '{' => tokens.push(Token::LBrace),
            '}' => tokens.push(Token::RBrace),
            ',' => tokens.push(Token::Comma),
            '*' => tokens.push(Token::Star),
            ';' => tokens.push(Token::Semi),
            '\'' | '"' => {
                let mut value = String::new();
                let mut closed = false;
                while let Some((_, c)) = chars.next() {
                    if c == ch {
                        closed = true;
                        break;
                    }
                    value.push(c);
                    if c == '\\'
                        && let Some((_, escaped)) = chars.next()
                    {
                        value.push(escaped);
                    }
                }
                ensure!(closed, "unterminated string literal in import statement");
                tokens.push(Token::Str(value));
            }
            c if is_ident_start(c) => {
                let mut ident = String::from(c);
                while let Some((_, next)) = chars.peek() {
                    if is_ident_continue(*next) {
                        ident.push(*next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(ident));
            }
            other => bail!(
                "unexpected character {other:?} at byte {idx} of import statement"
            ),
        }
    }

    Ok(tokens)
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphanumeric()
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_second(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos + 1)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn peek_is_ident(&self, word: &str) -> bool {
        matches!(self.peek(), Some(Token::Ident(found)) if found == word)
    }

    fn expect_keyword(&mut self, word: &str) -> Result<()> {
        match self.advance() {
            Some(Token::Ident(found)) if found == word => Ok(()),
            other => bail!("expected {word:?} in import statement, found {other:?}"),
        }
    }

    fn expect_name(&mut self) -> Result<String> {
        match self.advance() {
            Some(Token::Ident(name)) => Ok(name),
            other => bail!("expected an identifier in import clause, found {other:?}"),
        }
    }

    fn expect_string(&mut self) -> Result<String> {
        match self.advance() {
            Some(Token::Str(value)) => Ok(value),
            other => bail!("expected a module specifier string, found {other:?}"),
        }
    }

    fn parse_import(mut self, original: &str, span: Span) -> Result<ImportRecord> {
        self.expect_keyword("import")?;

        // Side-effect form: nothing bound, just the specifier.
        if let Some(Token::Str(_)) = self.peek() {
            let source = self.expect_string()?;
            self.expect_end()?;
            return Ok(ImportRecord {
                source,
                kind: ImportKind::SideEffect,
                bindings: Vec::new(),
                type_only: false,
                original_text: original.to_string(),
                span,
            });
        }

        // `type` is a statement-level marker only when followed by `{`,
        // `*`, or an identifier other than `from`; otherwise it is a
        // default import of the name `type`.
        let mut type_only = false;
        if self.peek_is_ident("type") {
            let is_marker = match self.peek_second() {
                Some(Token::LBrace | Token::Star) => true,
                Some(Token::Ident(word)) => word != "from",
                _ => false,
            };
            if is_marker {
                type_only = true;
                self.advance();
            }
        }

        let (kind, bindings) = match self.peek() {
            Some(Token::Star) => {
                self.advance();
                self.expect_keyword("as")?;
                let name = self.expect_name()?;
                (ImportKind::Namespace, vec![Binding::plain(name)])
            }
            Some(Token::LBrace) => (ImportKind::Named, self.parse_named_list()?),
            Some(Token::Ident(_)) => {
                let default = self.expect_name()?;
                let mut bindings = vec![Binding::plain(default)];
                if matches!(self.peek(), Some(Token::Comma)) {
                    self.advance();
                    match self.peek() {
                        Some(Token::LBrace) => bindings.extend(self.parse_named_list()?),
                        Some(Token::Star) => bail!(
                            "default-plus-namespace imports cannot be reordered; \
                             split the statement first"
                        ),
                        other => {
                            bail!("expected a named import list after the default binding, found {other:?}")
                        }
                    }
                }
                (ImportKind::Default, bindings)
            }
            other => bail!("malformed import clause starting with {other:?}"),
        };

        self.expect_keyword("from")?;
        let source = self.expect_string()?;
        self.expect_end()?;

        Ok(ImportRecord {
            source,
            kind,
            bindings,
            type_only,
            original_text: original.to_string(),
            span,
        })
    }

    fn parse_named_list(&mut self) -> Result<Vec<Binding>> {
        match self.advance() {
            Some(Token::LBrace) => {}
            other => bail!("expected '{{' in import clause, found {other:?}"),
        }

        let mut bindings = Vec::new();
        loop {
            if matches!(self.peek(), Some(Token::RBrace)) {
                self.advance();
                break;
            }

            // Inside braces `type` is a per-binding marker only when the
            // next token is an identifier other than `as`; `{ type as x }`
            // imports the name `type` itself.
            let mut binding_type_only = false;
            if self.peek_is_ident("type")
                && matches!(self.peek_second(), Some(Token::Ident(word)) if word != "as")
            {
                binding_type_only = true;
                self.advance();
            }

            let imported = self.expect_name()?;
            let mut local = None;
            if self.peek_is_ident("as") {
                self.advance();
                let alias = self.expect_name()?;
                // An alias equal to the imported name carries no signal.
                if alias != imported {
                    local = Some(alias);
                }
            }
            bindings.push(Binding {
                imported,
                local,
                type_only: binding_type_only,
            });

            match self.advance() {
                Some(Token::Comma) => {}
                Some(Token::RBrace) => break,
                other => bail!("expected ',' or '}}' in named import list, found {other:?}"),
            }
        }

        Ok(bindings)
    }

    fn expect_end(&mut self) -> Result<()> {
        if matches!(self.peek(), Some(Token::Semi)) {
            self.advance();
        }
        ensure!(
            self.peek().is_none(),
            "unexpected trailing tokens after import statement",
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests;
