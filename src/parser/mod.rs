//! Entry file scraping.
//!
//! This module handles:
//! - Tokenizing JavaScript entry files
//! - Finding the `require` calls that list a bundle's trace modules

pub mod lexer;
pub mod requires;

// Re-export main types
pub use lexer::{tokenize, Token, TokenKind};
pub use requires::{scrape_modules, scrape_source, ModuleList};
