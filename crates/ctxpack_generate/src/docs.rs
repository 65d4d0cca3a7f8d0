use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{debug, info};
use std::{env, fs, path::PathBuf};

use ctxpack_history::SnapshotStore;

#[derive(Debug, Clone, Parser)]
#[command(name = "docs")]
#[command(about = "Show the snapshot index")]
pub struct DocsConfig {
    /// Root directory of the project (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Directory holding snapshots and the index (defaults to <root>/code_docs)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct DocsIndex {
    pub path: PathBuf,
    pub content: String,
    /// Latest recorded version, if any
    pub latest: Option<u32>,
}

pub fn run_docs(cfg: DocsConfig) -> Result<DocsIndex> {
    let store = match (cfg.out_dir, cfg.root) {
        (Some(dir), _) => SnapshotStore::with_dir(dir),
        (None, Some(root)) => SnapshotStore::new(&root),
        (None, None) => {
            debug!("No root provided, searching for git root");
            SnapshotStore::new(&ctxpack_core::find_git_root(&env::current_dir()?)?)
        }
    };

    let path = store.index_path();
    if !path.exists() {
        bail!("The snapshot index has not been generated yet ({} is missing).", path.display());
    }
    info!("Reading index at {}", path.display());

    let content =
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let latest = store.latest()?.map(|(v, _)| v);
    Ok(DocsIndex { path, content, latest })
}
