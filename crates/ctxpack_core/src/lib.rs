//! Core engine for ctxpack.
//!
//! This crate turns one JavaScript/TypeScript file into a single text
//! document holding the file and the sources of its direct imports:
//! - Scanning `from '...'` import clauses
//! - Resolving requests (tsconfig/jsconfig path aliases, relative paths, index files)
//! - Aggregating resolved dependencies into an ordered report
//! - Compressing inlined sources (comments and blank lines removed)

mod aggregate;
mod classify;
mod compress;
mod config;
mod constants;
mod error;
mod parser;
mod paths;
mod reader;
mod report;
mod resolver;
mod types;

// Re-export public API
pub use aggregate::aggregate;
pub use classify::{is_supported, lang_for};
pub use compress::compress;
pub use config::{find_git_root, read_project_config};
pub use constants::{PROJECT_CONFIG_FILES, RESOLVE_SUFFIXES, SUPPORTED_EXTENSIONS};
pub use error::AggregateError;
pub use parser::imports_for;
pub use paths::{display_path, make_relative};
pub use reader::{FileReader, FsReader};
pub use report::{AggregateReport, ReportEntry};
pub use resolver::resolve;
pub use types::{AliasTable, Specifier};
