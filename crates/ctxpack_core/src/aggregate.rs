use log::{debug, info, trace};
use std::{collections::HashSet, path::Path};

use crate::{
    classify::{is_supported, lang_for},
    compress::compress,
    error::AggregateError,
    parser::imports_for,
    paths::display_path,
    reader::FileReader,
    report::{AggregateReport, ReportEntry},
    resolver::resolve,
    types::AliasTable,
};

/// Builds the aggregate report for a single root file.
///
/// Only the root's direct imports are followed. Each resolved dependency is
/// emitted once, in first-discovery order: supported sources are inlined,
/// anything else is referenced by path. Unresolved requests are omitted.
/// Any read failure aborts the whole run.
///
/// # Arguments
/// * `root_file` - Absolute path of the file to aggregate
/// * `project_root` - Directory that report paths are relative to
/// * `aliases` - Path aliases from the project config, if any
/// * `reader` - Source of file contents
pub fn aggregate<R: FileReader>(
    root_file: &Path,
    project_root: &Path,
    aliases: Option<&AliasTable>,
    reader: &R,
) -> Result<AggregateReport, AggregateError> {
    if !is_supported(root_file) {
        return Err(AggregateError::UnsupportedRoot(root_file.to_path_buf()));
    }

    info!("Aggregating imports of {}", root_file.display());
    let text = read(reader, root_file)?;
    let root_display = display_path(project_root, root_file);

    let mut report = AggregateReport::default();
    report.push(ReportEntry::Root { path: root_display.clone() });

    let mut visited = HashSet::new();
    for spec in imports_for(&text) {
        let Some(resolved) = resolve(&spec.request, root_file, project_root, aliases) else {
            trace!("Skipping unresolved import '{}' at offset {}", spec.request, spec.offset);
            continue;
        };
        if !visited.insert(resolved.clone()) {
            trace!("Already visited {} (import at offset {})", resolved.display(), spec.offset);
            continue;
        }

        let path = display_path(project_root, &resolved);
        if is_supported(&resolved) {
            debug!("Inlining {}", path);
            let content = compress(&read(reader, &resolved)?);
            report.push(ReportEntry::Inlined { path, lang: lang_for(&resolved), content });
        } else {
            debug!("Referencing {} without content", path);
            report.push(ReportEntry::ExternalRef { path });
        }
    }

    report.push(ReportEntry::Origin {
        path: root_display,
        lang: lang_for(root_file),
        content: compress(&text),
    });

    info!(
        "Aggregated {} inlined and {} referenced dependencies",
        report.inlined_count(),
        report.external_count()
    );
    Ok(report)
}

fn read<R: FileReader>(reader: &R, path: &Path) -> Result<String, AggregateError> {
    reader
        .read_to_string(path)
        .map_err(|source| AggregateError::Read { path: path.to_path_buf(), source })
}
