//! Versioned storage for ctxpack reports.
//!
//! Each distinct report is written as `v<N>_context.md` next to an `index.md`
//! table listing every version with its timestamp. Recording a report that
//! is byte-identical to the latest snapshot writes nothing.
//!
//! ```no_run
//! use ctxpack_history::{RecordOutcome, SnapshotStore};
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = SnapshotStore::new(std::path::Path::new("/path/to/project"));
//! match store.record("ROOT:src/app.ts\n---\n")? {
//!     RecordOutcome::Created { version, .. } => println!("v{version} generated"),
//!     RecordOutcome::Unchanged { version, .. } => println!("no changes since v{version}"),
//! }
//! # Ok(())
//! # }
//! ```

mod index;
mod store;

pub use store::{DEFAULT_DIR, RecordOutcome, SnapshotStore};
