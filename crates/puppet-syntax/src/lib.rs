//! `puppet-syntax` - Lexer, parser, and concrete syntax tree for Puppet manifests.
//!
//! This crate provides the low-level syntactic analysis for Puppet source code:
//!
//! - **Lexer**: Tokenizes source text into a stream of tokens
//! - **Parser**: Builds a concrete syntax tree (CST) from tokens
//! - **Syntax Tree**: Lossless representation of the source code
//!
//! # Design Principles
//!
//! The crate uses the `rowan` library for building lossless syntax trees:
//!
//! - **Lossless**: All source text is preserved, including whitespace and comments
//! - **Error-tolerant**: Parsing continues after errors, producing a partial tree
//!   in which unparseable regions are `ErrorNode`s
//! - **Positioned**: Every node starts at its first significant token, so a
//!   node's start offset tells which line it begins on
//!
//! # Example
//!
//! ```
//! use puppet_syntax::{parse, SyntaxKind};
//!
//! let parse = parse("class ntp {\n  include ntp::install\n}\n");
//! assert!(parse.ok());
//!
//! let class = parse.syntax().first_child().unwrap();
//! assert_eq!(class.kind(), SyntaxKind::ClassDefinition);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod lexer;
pub mod parser;
pub mod syntax;
mod token_kinds;

pub use lexer::{lex, Lexer, Token, TokenKind};
pub use parser::{parse, Parse, ParseError};
pub use syntax::{PuppetLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
