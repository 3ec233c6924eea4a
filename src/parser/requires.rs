//! Scrape the trace modules a bundle entry file packages.
//!
//! Entry files register their trace modules with an array of require calls:
//!
//! ```js
//! Plotly.register([
//!     require('./scattergeo'),
//!     require('./choropleth')
//! ]);
//! ```
//!
//! A string literal qualifies when it is a whole argument of a bare
//! `require(...)` call and sits in an array literal, either because the call
//! is an array element (above) or because the literal is an element of an
//! array passed straight to `require` (`require(['./a', './b'])`).
//! Anything else, including a lone `require('./x')`, is ignored.

use super::lexer::{tokenize, Token, TokenKind};
use crate::utils::error::ScrapeError;
use log::debug;
use std::path::Path;

/// Module names in declaration order, duplicates kept
pub type ModuleList = Vec<String>;

const RELATIVE_PREFIX: &str = "./";

/// Open bracket on the scan stack
#[derive(Debug)]
enum FrameKind {
    Array {
        /// Array is a direct argument of `require`
        require_arg: bool,
        pending: Vec<String>,
    },
    RequireCall {
        /// Call is a direct element of an array
        array_element: bool,
        pending: Vec<String>,
    },
    Group {
        /// Parenthesized array element, e.g. `[(require('./a'))]`
        array_element: bool,
        pending: Vec<String>,
    },
    Block,
}

#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    line: usize,
    open: char,
}

/// Read an entry file and scrape its module list
///
/// # Errors
/// * `ScrapeError::ReadFailed` - entry file missing or not UTF-8
/// * `ScrapeError::Syntax` - entry file cannot be tokenized or has unbalanced brackets
pub fn scrape_modules(path: impl AsRef<Path>) -> Result<ModuleList, ScrapeError> {
    let path = path.as_ref();

    debug!("Scraping modules from: {}", path.display());

    let source = std::fs::read_to_string(path).map_err(|source| ScrapeError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    scrape_source(&source)
}

/// Scrape module names from entry file source text
pub fn scrape_source(source: &str) -> Result<ModuleList, ScrapeError> {
    let tokens = tokenize(source)?;
    Scanner::new(&tokens).run()
}

struct Scanner<'a> {
    tokens: &'a [Token],
    stack: Vec<Frame>,
    modules: ModuleList,
}

impl<'a> Scanner<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            stack: Vec::new(),
            modules: Vec::new(),
        }
    }

    fn run(mut self) -> Result<ModuleList, ScrapeError> {
        let tokens = self.tokens;
        for (i, token) in tokens.iter().enumerate() {
            match &token.kind {
                TokenKind::Punct('(') => {
                    let kind = if self.is_require_callee(i) {
                        FrameKind::RequireCall {
                            array_element: self.is_array_element(i - 1),
                            pending: Vec::new(),
                        }
                    } else {
                        FrameKind::Group {
                            array_element: self.is_array_element(i),
                            pending: Vec::new(),
                        }
                    };
                    self.open(kind, token, '(');
                }
                TokenKind::Punct('[') => {
                    let require_arg = matches!(
                        self.top(),
                        Some(FrameKind::RequireCall { .. })
                    ) && self.prev_is(i, &['(', ',']);
                    self.open(
                        FrameKind::Array {
                            require_arg,
                            pending: Vec::new(),
                        },
                        token,
                        '[',
                    );
                }
                TokenKind::Punct('{') => self.open(FrameKind::Block, token, '{'),
                TokenKind::Punct(c @ (')' | ']' | '}')) => self.close(i, *c)?,
                TokenKind::Str(value) => self.visit_string(i, value),
                _ => {}
            }
        }

        if let Some(frame) = self.stack.last() {
            return Err(ScrapeError::Syntax {
                line: frame.line,
                message: format!("unclosed '{}'", frame.open),
            });
        }

        Ok(self.modules)
    }

    fn open(&mut self, kind: FrameKind, token: &Token, open: char) {
        self.stack.push(Frame {
            kind,
            line: token.line,
            open,
        });
    }

    fn close(&mut self, i: usize, close: char) -> Result<(), ScrapeError> {
        let line = self.tokens[i].line;
        let frame = self.stack.pop().ok_or_else(|| ScrapeError::Syntax {
            line,
            message: format!("unexpected '{}'", close),
        })?;

        if matching_close(frame.open) != close {
            return Err(ScrapeError::Syntax {
                line,
                message: format!(
                    "expected '{}' to close '{}' from line {}, found '{}'",
                    matching_close(frame.open),
                    frame.open,
                    frame.line,
                    close
                ),
            });
        }

        match frame.kind {
            FrameKind::RequireCall {
                array_element: true,
                pending,
            }
            | FrameKind::Group {
                array_element: true,
                pending,
            } => self.commit_element(i, pending),
            FrameKind::Array {
                require_arg: true,
                pending,
            } if self.next_is(i, &[',', ')']) => self.modules.extend(pending),
            _ => {}
        }

        Ok(())
    }

    /// Hand modules of a closed array element to the enclosing array or group
    fn commit_element(&mut self, i: usize, pending: Vec<String>) {
        let whole_array_element = matches!(self.top(), Some(FrameKind::Array { .. }))
            && self.next_is(i, &[',', ']']);
        let whole_group_content = matches!(
            self.top(),
            Some(FrameKind::Group {
                array_element: true,
                ..
            })
        ) && self.next_is(i, &[')']);

        if whole_array_element {
            self.modules.extend(pending);
        } else if whole_group_content {
            if let Some(FrameKind::Group { pending: outer, .. }) =
                self.stack.last_mut().map(|f| &mut f.kind)
            {
                outer.extend(pending);
            }
        }
    }

    fn visit_string(&mut self, i: usize, value: &str) {
        let qualifies = match self.top() {
            Some(FrameKind::RequireCall {
                array_element: true,
                ..
            }) => self.prev_is(i, &['(', ',']) && self.next_is(i, &[',', ')']),
            Some(FrameKind::Array {
                require_arg: true, ..
            }) => self.prev_is(i, &['[', ',']) && self.next_is(i, &[',', ']']),
            _ => false,
        };

        if !qualifies {
            return;
        }

        let name = value.strip_prefix(RELATIVE_PREFIX).unwrap_or(value);
        if let Some(
            FrameKind::RequireCall { pending, .. } | FrameKind::Array { pending, .. },
        ) = self.stack.last_mut().map(|f| &mut f.kind)
        {
            pending.push(name.to_string());
        }
    }

    /// `(` at `i` opens a call of the bare identifier `require`
    fn is_require_callee(&self, i: usize) -> bool {
        i >= 1
            && self.tokens[i - 1].is_ident("require")
            && !(i >= 2 && self.tokens[i - 2].is_punct('.'))
    }

    /// Token at `i` starts an element of the innermost array, possibly parenthesized
    fn is_array_element(&self, i: usize) -> bool {
        match self.top() {
            Some(FrameKind::Array { .. }) => self.prev_is(i, &['[', ',']),
            Some(FrameKind::Group {
                array_element: true,
                ..
            }) => self.prev_is(i, &['(']),
            _ => false,
        }
    }

    fn top(&self) -> Option<&FrameKind> {
        self.stack.last().map(|f| &f.kind)
    }

    fn prev_is(&self, i: usize, puncts: &[char]) -> bool {
        i >= 1 && puncts.iter().any(|&c| self.tokens[i - 1].is_punct(c))
    }

    fn next_is(&self, i: usize, puncts: &[char]) -> bool {
        self.tokens
            .get(i + 1)
            .is_some_and(|t| puncts.iter().any(|&c| t.is_punct(c)))
    }
}

fn matching_close(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_require_calls_in_array() {
        let source = r#"
            'use strict';

            var Plotly = require('./core');

            Plotly.register([
                require('./scattergeo'),
                require('./choropleth')
            ]);

            module.exports = Plotly;
        "#;

        assert_eq!(scrape_source(source).unwrap(), vec!["scattergeo", "choropleth"]);
    }

    #[test]
    fn test_array_argument_of_require() {
        let modules = scrape_source("require([ './scatter', './bar' ])").unwrap();
        assert_eq!(modules, vec!["scatter", "bar"]);
    }

    #[test]
    fn test_lone_require_is_ignored() {
        assert!(scrape_source("require('./x');").unwrap().is_empty());
        assert!(scrape_source("var x = require('./x');").unwrap().is_empty());
    }

    #[test]
    fn test_duplicates_and_order_kept() {
        let source = "register([require('./b'), require('./a'), require('./b')]);";
        assert_eq!(scrape_source(source).unwrap(), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_only_leading_prefix_stripped() {
        let source = "[require('./traces/./bar'), require('lib/pie'), require('../box')]";
        assert_eq!(
            scrape_source(source).unwrap(),
            vec!["traces/./bar", "lib/pie", "../box"]
        );
    }

    #[test]
    fn test_member_require_ignored() {
        let source = "[loader.require('./a'), require('./b')]";
        assert_eq!(scrape_source(source).unwrap(), vec!["b"]);
    }

    #[test]
    fn test_literal_inside_expression_ignored() {
        let source = "[require('./a' + suffix), require('./b').default, require('./c')]";
        assert_eq!(scrape_source(source).unwrap(), vec!["c"]);
    }

    #[test]
    fn test_nested_array_not_argument() {
        let source = "require(['./a'].concat(extra))";
        assert!(scrape_source(source).unwrap().is_empty());
    }

    #[test]
    fn test_commented_out_module_ignored() {
        let source = "register([\n  require('./a'),\n  // require('./b'),\n  require('./c')\n]);";
        assert_eq!(scrape_source(source).unwrap(), vec!["a", "c"]);
    }

    #[test]
    fn test_trailing_comma() {
        let source = "register([require('./a'), require('./b'),]);";
        assert_eq!(scrape_source(source).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_parenthesized_require_in_array() {
        let source = "register([(require('./a')), ((require('./b'))), require('./c')]);";
        assert_eq!(scrape_source(source).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parenthesized_require_inside_larger_expression_ignored() {
        let source = "register([(require('./a')).x, (require('./b') || c), (x, require('./d'))]);";
        assert!(scrape_source(source).unwrap().is_empty());
    }

    #[test]
    fn test_regex_statements_do_not_break_scraping() {
        let source = "if (ok) /'/.test(s);\nfunction f() {}\n/\"/.test(s);\nPlotly.register([require('./bar')]);";
        assert_eq!(scrape_source(source).unwrap(), vec!["bar"]);
    }

    #[test]
    fn test_unbalanced_brackets() {
        let err = scrape_source("register([require('./a')]").unwrap_err();
        assert!(matches!(err, ScrapeError::Syntax { line: 1, .. }));

        let err = scrape_source("register([require('./a')));").unwrap_err();
        assert!(matches!(err, ScrapeError::Syntax { .. }));
    }

    #[test]
    fn test_unexpected_close() {
        let err = scrape_source("x);\n").unwrap_err();
        assert!(matches!(err, ScrapeError::Syntax { line: 1, .. }));
    }
}
