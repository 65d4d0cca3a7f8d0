use anyhow::Result;
use log::{debug, info};

use ctxpack_core::{AggregateError, FsReader, aggregate, display_path, is_supported};
use ctxpack_history::SnapshotStore;

use crate::{config::Config, types::GenerateResult};

/// Store for a config: `--out-dir` if given, `<root>/code_docs` otherwise.
pub(crate) fn store_for(cfg: &Config) -> Result<SnapshotStore> {
    Ok(match &cfg.out_dir {
        Some(dir) => SnapshotStore::with_dir(dir),
        None => SnapshotStore::new(cfg.root()?),
    })
}

pub fn run_generate(mut cfg: Config) -> Result<GenerateResult> {
    info!("Starting report generation");

    // Checked before touching the filesystem or looking for a project root
    if !is_supported(&cfg.file) {
        return Err(AggregateError::UnsupportedRoot(cfg.file).into());
    }

    cfg.initialize()?;
    let root = cfg.root()?.clone();
    debug!("Config: file={:?}, root={:?}, out_dir={:?}", cfg.file, root, cfg.out_dir);

    let report = aggregate(&cfg.file, &root, Some(&cfg.aliases), &FsReader)?;
    let text = report.to_string();
    debug!("Report is {} bytes", text.len());

    let outcome = if cfg.dry_run {
        info!("Dry run, not recording a snapshot");
        None
    } else {
        Some(store_for(&cfg)?.record(&text)?)
    };

    Ok(GenerateResult {
        root_file: display_path(&root, &cfg.file),
        report: text,
        inlined: report.inlined_count(),
        external: report.external_count(),
        outcome,
    })
}
