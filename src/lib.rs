//! Shroud - selector obfuscation for front-end files
//!
//! Shroud is a CLI tool and library that rewrites CSS class names and element
//! IDs across HTML, JS, and CSS files, replacing each identifier with a random
//! token, consistently across all files. It is a lightweight deterrent against
//! selector scraping; matching is regex-based, not a real parser.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `namegen`: Random replacement token generation
//! - `pipeline`: Two-pass scan/rewrite orchestration
//! - `report`: Output formatting and printing
//! - `rewriter`: Identifier substitution rules
//! - `scanner`: Identifier extraction rules

pub mod cli;
pub mod config;
pub mod namegen;
pub mod pipeline;
pub mod report;
pub mod rewriter;
pub mod scanner;
