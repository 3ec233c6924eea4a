//! Minimal JavaScript tokenizer.
//!
//! Only produces what the require scraper looks at: identifiers, string
//! literals and single punctuation characters. Comments are dropped;
//! numbers, template literals and regex literals become opaque `Literal`
//! tokens so that quotes inside them are never mistaken for strings.

use crate::utils::error::ScrapeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident(String),
    /// String literal with escapes decoded
    Str(String),
    Punct(char),
    /// Number, template or regex literal
    Literal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based line the token starts on
    pub line: usize,
}

impl Token {
    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }

    pub fn is_ident(&self, name: &str) -> bool {
        matches!(&self.kind, TokenKind::Ident(ident) if ident == name)
    }
}

/// Keywords after which a `/` starts a regex rather than a division
const REGEX_PRECEDING_KEYWORDS: &[&str] = &[
    "return", "typeof", "instanceof", "in", "of", "new", "delete", "void", "throw", "case", "do",
    "else", "yield", "await",
];

/// Keywords whose parenthesized header may be followed by a regex statement
const STATEMENT_HEADER_KEYWORDS: &[&str] = &["if", "while", "for", "with"];

/// Punctuation after which `{` opens an object literal
const EXPRESSION_BRACE_PRECEDERS: &[char] = &['(', '[', ',', '=', ':', '?'];

/// Tokenize JavaScript source
///
/// # Errors
/// * `ScrapeError::Syntax` - unterminated string, comment, template or regex literal
pub fn tokenize(source: &str) -> Result<Vec<Token>, ScrapeError> {
    Lexer::new(source).run()
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    tokens: Vec<Token>,
    /// Per open `(`: it follows `if`/`while`/`for`/`with`
    parens: Vec<bool>,
    /// Per open `{`: it opens an expression rather than a block
    braces: Vec<bool>,
    /// The last `)` or `}` ended a statement header or a block
    regex_after_close: bool,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            tokens: Vec::new(),
            parens: Vec::new(),
            braces: Vec::new(),
            regex_after_close: false,
        }
    }

    fn run(mut self) -> Result<Vec<Token>, ScrapeError> {
        while let Some(c) = self.peek(0) {
            let start_line = self.line;
            match c {
                '\n' => {
                    self.line += 1;
                    self.pos += 1;
                }
                c if c.is_whitespace() => self.pos += 1,
                '/' if self.peek(1) == Some('/') => self.skip_line_comment(),
                '/' if self.peek(1) == Some('*') => self.skip_block_comment()?,
                '/' if self.regex_allowed() => {
                    self.skip_regex()?;
                    self.push(TokenKind::Literal, start_line);
                }
                '"' | '\'' => {
                    let value = self.read_string(c)?;
                    self.push(TokenKind::Str(value), start_line);
                }
                '`' => {
                    self.skip_template()?;
                    self.push(TokenKind::Literal, start_line);
                }
                c if is_ident_start(c) => {
                    let ident = self.read_while(is_ident_part);
                    self.push(TokenKind::Ident(ident), start_line);
                }
                c if c.is_ascii_digit() => {
                    self.read_while(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_');
                    self.push(TokenKind::Literal, start_line);
                }
                c => {
                    self.pos += 1;
                    self.track_bracket(c);
                    self.push(TokenKind::Punct(c), start_line);
                }
            }
        }

        Ok(self.tokens)
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn push(&mut self, kind: TokenKind, line: usize) {
        self.tokens.push(Token { kind, line });
    }

    fn error(&self, line: usize, message: &str) -> ScrapeError {
        ScrapeError::Syntax {
            line,
            message: message.to_string(),
        }
    }

    fn read_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while self.peek(0).is_some_and(&pred) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    /// Record bracket context before `c` is pushed
    fn track_bracket(&mut self, c: char) {
        match c {
            '(' => {
                let header = matches!(
                    self.tokens.last().map(|t| &t.kind),
                    Some(TokenKind::Ident(ident)) if STATEMENT_HEADER_KEYWORDS.contains(&ident.as_str())
                );
                self.parens.push(header);
            }
            ')' => self.regex_after_close = self.parens.pop().unwrap_or(false),
            '{' => {
                let expression = match self.tokens.last().map(|t| &t.kind) {
                    Some(TokenKind::Punct(p)) => EXPRESSION_BRACE_PRECEDERS.contains(p),
                    Some(TokenKind::Ident(ident)) => ident == "return",
                    _ => false,
                };
                self.braces.push(expression);
            }
            '}' => self.regex_after_close = !self.braces.pop().unwrap_or(false),
            _ => {}
        }
    }

    /// A `/` starts a regex unless it follows something that ends an operand
    fn regex_allowed(&self) -> bool {
        match self.tokens.last().map(|t| &t.kind) {
            None => true,
            Some(TokenKind::Ident(ident)) => REGEX_PRECEDING_KEYWORDS.contains(&ident.as_str()),
            Some(TokenKind::Str(_)) | Some(TokenKind::Literal) => false,
            Some(TokenKind::Punct(')' | '}')) => self.regex_after_close,
            Some(TokenKind::Punct(c)) => *c != ']',
        }
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek(0) {
            if c == '\n' {
                break;
            }
            self.pos += 1;
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), ScrapeError> {
        let start_line = self.line;
        self.pos += 2;
        loop {
            match self.peek(0) {
                None => return Err(self.error(start_line, "unterminated block comment")),
                Some('*') if self.peek(1) == Some('/') => {
                    self.pos += 2;
                    return Ok(());
                }
                Some('\n') => {
                    self.line += 1;
                    self.pos += 1;
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    fn skip_regex(&mut self) -> Result<(), ScrapeError> {
        let start_line = self.line;
        let mut in_class = false;
        self.pos += 1;
        loop {
            match self.peek(0) {
                None | Some('\n') => {
                    return Err(self.error(start_line, "unterminated regex literal"))
                }
                Some('\\') => self.pos += 2,
                Some('[') => {
                    in_class = true;
                    self.pos += 1;
                }
                Some(']') => {
                    in_class = false;
                    self.pos += 1;
                }
                Some('/') if !in_class => {
                    self.pos += 1;
                    break;
                }
                Some(_) => self.pos += 1,
            }
        }
        // flags
        self.read_while(is_ident_part);
        Ok(())
    }

    fn skip_template(&mut self) -> Result<(), ScrapeError> {
        let start_line = self.line;
        // Brace depth inside `${ ... }` substitutions
        let mut depth = 0usize;
        self.pos += 1;
        loop {
            match self.peek(0) {
                None => return Err(self.error(start_line, "unterminated template literal")),
                Some('\\') => {
                    if self.peek(1) == Some('\n') {
                        self.line += 1;
                    }
                    self.pos += 2;
                }
                Some('\n') => {
                    self.line += 1;
                    self.pos += 1;
                }
                Some('$') if self.peek(1) == Some('{') => {
                    depth += 1;
                    self.pos += 2;
                }
                Some('{') if depth > 0 => {
                    depth += 1;
                    self.pos += 1;
                }
                Some('}') if depth > 0 => {
                    depth -= 1;
                    self.pos += 1;
                }
                Some('`') if depth == 0 => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    fn read_string(&mut self, quote: char) -> Result<String, ScrapeError> {
        let start_line = self.line;
        let mut value = String::new();
        self.pos += 1;
        loop {
            match self.peek(0) {
                None | Some('\n') => {
                    return Err(self.error(start_line, "unterminated string literal"))
                }
                Some(c) if c == quote => {
                    self.pos += 1;
                    return Ok(value);
                }
                Some('\\') => {
                    self.pos += 1;
                    self.read_escape(&mut value)?;
                }
                Some(c) => {
                    value.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    fn read_escape(&mut self, value: &mut String) -> Result<(), ScrapeError> {
        let Some(c) = self.peek(0) else {
            return Err(self.error(self.line, "unterminated string literal"));
        };
        self.pos += 1;
        match c {
            'n' => value.push('\n'),
            't' => value.push('\t'),
            'r' => value.push('\r'),
            'b' => value.push('\u{8}'),
            'f' => value.push('\u{c}'),
            'v' => value.push('\u{b}'),
            '0' => value.push('\0'),
            // line continuation
            '\n' => self.line += 1,
            '\r' => {
                if self.peek(0) == Some('\n') {
                    self.pos += 1;
                }
                self.line += 1;
            }
            'x' => self.read_code_point(2, value),
            'u' if self.peek(0) == Some('{') => {
                self.pos += 1;
                let hex = self.read_while(|c| c.is_ascii_hexdigit());
                if self.peek(0) == Some('}') {
                    self.pos += 1;
                }
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(ch) => value.push(ch),
                    None => return Err(self.error(self.line, "invalid unicode escape")),
                }
            }
            'u' => self.read_code_point(4, value),
            other => value.push(other),
        }
        Ok(())
    }

    /// `\xHH` / `\uHHHH`; malformed escapes are kept verbatim
    fn read_code_point(&mut self, digits: usize, value: &mut String) {
        let hex: String = (0..digits).filter_map(|i| self.peek(i)).collect();
        let decoded = (hex.len() == digits && hex.chars().all(|c| c.is_ascii_hexdigit()))
            .then(|| u32::from_str_radix(&hex, 16).ok())
            .flatten()
            .and_then(char::from_u32);

        match decoded {
            Some(ch) => {
                value.push(ch);
                self.pos += digits;
            }
            None => value.push(self.chars[self.pos - 1]),
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
