use anyhow::{Result, anyhow};
use log::{debug, trace, warn};
use serde::Deserialize;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{constants::PROJECT_CONFIG_FILES, types::AliasTable};

/// Walks up from `start` until a directory containing `.git` is found.
pub fn find_git_root(start: &Path) -> Result<PathBuf> {
    debug!("Searching for git root from {:?}", start);
    let mut current_dir = start.to_path_buf();

    loop {
        let git_dir = current_dir.join(".git");
        trace!("Checking for .git at: {:?}", git_dir);
        if git_dir.exists() {
            debug!("Found git root at: {:?}", current_dir);
            return Ok(current_dir);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                debug!("Could not find .git directory in any parent folder");
                return Err(anyhow!(
                    "Could not find .git directory in any parent folder of {}",
                    start.display()
                ));
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectConfigFile {
    #[serde(default)]
    compiler_options: Option<CompilerOptions>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    #[serde(default)]
    base_url: Option<Value>,
    #[serde(default)]
    paths: Option<Value>,
}

/// Loads path aliases from `tsconfig.json` (or `jsconfig.json`) at the project root.
///
/// Never fails: a missing, unreadable or malformed config yields the default
/// table (`baseUrl: "."`, no paths) so resolution continues without aliases.
pub fn read_project_config(root: &Path) -> AliasTable {
    debug!("Reading project config from root: {:?}", root);
    let Some(config_path) =
        PROJECT_CONFIG_FILES.iter().map(|name| root.join(name)).find(|p| p.exists())
    else {
        debug!("No tsconfig.json or jsconfig.json found");
        return AliasTable::default();
    };
    trace!("Found project config at: {:?}", config_path);

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read {}: {}", config_path.display(), e);
            return AliasTable::default();
        }
    };

    let parsed: ProjectConfigFile = match serde_json::from_str(&strip_jsonc_comments(&content)) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Failed to parse {}: {}", config_path.display(), e);
            return AliasTable::default();
        }
    };

    let table = alias_table_from(parsed.compiler_options.unwrap_or_default());
    debug!("Loaded {} path aliases (baseUrl '{}')", table.len(), table.base_url);
    table
}

fn alias_table_from(options: CompilerOptions) -> AliasTable {
    let base_url = options
        .base_url
        .as_ref()
        .and_then(Value::as_str)
        .filter(|b| !b.is_empty())
        .unwrap_or(".")
        .to_string();

    let paths = options.paths.as_ref().and_then(Value::as_object).map(|obj| {
        obj.iter()
            .map(|(alias, targets)| {
                let replacements: Vec<String> = targets
                    .as_array()
                    .map(|arr| arr.iter().filter_map(|t| t.as_str().map(String::from)).collect())
                    .unwrap_or_default();
                trace!("Found path alias: '{}' -> {:?}", alias, replacements);
                (alias.clone(), replacements)
            })
            .collect()
    });

    AliasTable { base_url, paths }
}

/// Strip JSONC comments (`//` line and `/* */` block) outside of string literals.
fn strip_jsonc_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    // Keep line structure so serde_json error positions stay meaningful
                    if next == '\n' {
                        out.push('\n');
                    }
                    prev = next;
                }
            }
            _ => out.push(c),
        }
    }

    out
}
