//! Report generation pipeline for ctxpack.
//!
//! Resolves the project root, loads path aliases, aggregates the root file
//! with its direct imports and records the report as a numbered snapshot.
//!
//! # Examples
//!
//! ```no_run
//! use clap::Parser;
//! use ctxpack_generate::{Config, run_generate};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config::parse_from(["generate", "/path/to/project/src/app.ts"]);
//! let result = run_generate(cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! ctxpack_generate::print_generate_result(&mut stdout, &result)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod config;
mod docs;
mod reporter;
mod runner;
mod types;

// Re-export public API
pub use config::Config;
pub use ctxpack_core::AggregateError;
pub use docs::{DocsConfig, DocsIndex, run_docs};
pub use reporter::{print_docs_index, print_generate_result, print_report, print_unsupported_root};
pub use runner::run_generate;
pub use types::GenerateResult;
