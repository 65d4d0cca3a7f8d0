use std::{
    env,
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use log::{debug, trace};

use ctxpack_core::make_relative;
use ctxpack_history::RecordOutcome;

use crate::{docs::DocsIndex, types::GenerateResult};

/// Relativize a path to the current working directory for clickable links
fn relativize_to_cwd(path: &Path) -> String {
    let cwd = match env::current_dir() {
        Ok(cwd) => cwd,
        Err(_) => {
            debug!("Failed to get current directory");
            return path.display().to_string();
        }
    };
    trace!("Relativizing {:?} to cwd {:?}", path, cwd);

    match make_relative(path, &cwd) {
        Some(rel) => rel.to_string_lossy().to_string(),
        None => path.display().to_string(),
    }
}

pub fn print_generate_result<W: Write>(writer: &mut W, result: &GenerateResult) -> io::Result<()> {
    debug!("Printing result for {}", result.root_file);
    let summary = format!(
        "{} ({} inlined, {} referenced)",
        result.root_file.blue(),
        result.inlined.to_string().cyan(),
        result.external.to_string().cyan()
    );

    match &result.outcome {
        Some(RecordOutcome::Created { version, path }) => {
            writeln!(
                writer,
                "{} v{} generated for {} -> {}",
                "✓".green().bold(),
                version,
                summary,
                relativize_to_cwd(path).dimmed()
            )?;
        }
        Some(RecordOutcome::Unchanged { version, path }) => {
            writeln!(
                writer,
                "{} No changes since v{} for {} ({})",
                "ℹ".bright_blue().bold(),
                version,
                summary,
                relativize_to_cwd(path).dimmed()
            )?;
        }
        None => {
            writeln!(writer, "{} Dry run for {}, nothing recorded", "●".bright_blue(), summary)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Writes the report exactly as rendered, with no trailing newline, so that
/// piping stdout yields the same bytes as the recorded snapshot.
pub fn print_report<W: Write>(writer: &mut W, report: &str) -> io::Result<()> {
    writer.write_all(report.as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn print_unsupported_root<W: Write>(writer: &mut W, file: &Path) -> io::Result<()> {
    writeln!(
        writer,
        "{} Main file must be .ts, .tsx, .js or .jsx: {}",
        "⚠".yellow().bold(),
        relativize_to_cwd(file).yellow()
    )?;
    writer.flush()?;
    Ok(())
}

pub fn print_docs_index<W: Write>(writer: &mut W, index: &DocsIndex) -> io::Result<()> {
    let latest = match index.latest {
        Some(v) => format!("latest v{v}"),
        None => "no versions".to_string(),
    };
    writeln!(
        writer,
        "{} {} ({})\n",
        "●".bright_blue(),
        relativize_to_cwd(&index.path).blue(),
        latest.cyan()
    )?;
    write!(writer, "{}", index.content)?;
    writer.flush()?;
    Ok(())
}
