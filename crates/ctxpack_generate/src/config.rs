use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

use ctxpack_core::AliasTable;

#[derive(Debug, Clone, Parser)]
#[command(name = "generate")]
#[command(about = "Bundle a JS/TS file and its direct imports into a versioned report")]
pub struct Config {
    /// Root file to aggregate (.ts, .tsx, .js or .jsx)
    pub file: PathBuf,

    /// Root directory of the project (defaults to the git root above the file)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Directory for snapshots and the index (defaults to <root>/code_docs)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Also print the report to stdout
    #[arg(long)]
    pub stdout: bool,

    /// Build the report without recording a snapshot
    #[arg(long)]
    pub dry_run: bool,

    #[clap(skip)]
    pub aliases: AliasTable,
}

impl Config {
    /// Resolve the root file and project root to absolute paths and load path aliases
    pub fn initialize(&mut self) -> Result<()> {
        let file = self
            .file
            .canonicalize()
            .with_context(|| format!("Cannot access {}", self.file.display()))?;
        debug!("Using root file: {:?}", file);

        let root = match self.root.take() {
            Some(r) => {
                debug!("Using provided root directory: {:?}", r);
                r.canonicalize().with_context(|| format!("Cannot access {}", r.display()))?
            }
            None => {
                debug!("No root provided, searching for git root");
                let start = file.parent().unwrap_or(&file);
                ctxpack_core::find_git_root(start)?
            }
        };
        info!("Using root directory: {}", root.display());

        self.aliases = ctxpack_core::read_project_config(&root);
        debug!("Found {} path aliases", self.aliases.len());

        self.file = file;
        self.root = Some(root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_with_explicit_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/app.ts"), "").unwrap();
        fs::write(
            root.join("tsconfig.json"),
            r#"{"compilerOptions": {"paths": {"@/*": ["src/*"]}}}"#,
        )
        .unwrap();

        let mut cfg = Config::parse_from([
            "generate",
            root.join("src/app.ts").to_str().unwrap(),
            "--root",
            root.to_str().unwrap(),
        ]);
        cfg.initialize().unwrap();

        assert_eq!(cfg.root().unwrap(), &root);
        assert_eq!(cfg.file, root.join("src/app.ts"));
        assert_eq!(cfg.aliases.len(), 1);
    }

    #[test]
    fn test_initialize_finds_git_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().canonicalize().unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::create_dir_all(root.join("web/src")).unwrap();
        fs::write(root.join("web/src/main.js"), "").unwrap();

        let mut cfg = Config::parse_from(["generate", root.join("web/src/main.js").to_str().unwrap()]);
        cfg.initialize().unwrap();

        assert_eq!(cfg.root().unwrap(), &root);
    }

    #[test]
    fn test_initialize_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.ts");

        let mut cfg = Config::parse_from(["generate", missing.to_str().unwrap()]);
        assert!(cfg.initialize().is_err());
    }

    #[test]
    fn test_root_before_initialize() {
        let cfg = Config::parse_from(["generate", "src/app.ts", "--dry-run"]);
        assert!(cfg.dry_run);
        assert!(cfg.root().is_err());
    }
}
