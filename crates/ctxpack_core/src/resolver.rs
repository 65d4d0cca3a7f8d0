use log::{debug, trace};
use path_clean::clean;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{constants::RESOLVE_SUFFIXES, types::AliasTable};

enum AliasMatch {
    /// No alias prefix matched the request
    NoMatch,
    /// An alias matched but has no replacement to substitute
    Unmapped,
    Target(PathBuf),
}

/// Resolves an import request to an existing project file.
///
/// Aliases are tried first, in definition order, and the first matching prefix
/// is final: a matched alias whose target does not exist leaves the request
/// unresolved. Requests starting with `.` or `/` are otherwise resolved from
/// the importing file's directory. Bare package names resolve to `None`.
pub fn resolve(
    request: &str,
    from_file: &Path,
    root: &Path,
    aliases: Option<&AliasTable>,
) -> Option<PathBuf> {
    trace!("Resolving: '{}' from {}", request, from_file.display());

    let target = match match_alias(request, root, aliases) {
        AliasMatch::Target(target) => target,
        AliasMatch::Unmapped => {
            trace!("Alias for '{}' has no replacement path", request);
            return None;
        }
        AliasMatch::NoMatch if request.starts_with('.') || request.starts_with('/') => {
            trace!("Resolving as relative import: '{}'", request);
            let base = from_file.parent().unwrap_or(root);
            clean(base.join(request))
        }
        AliasMatch::NoMatch => {
            trace!("Treating '{}' as external", request);
            return None;
        }
    };

    let resolved = resolve_file(&target);
    match &resolved {
        Some(p) => debug!("Resolved '{}' to {}", request, p.display()),
        None => trace!("No file found for '{}' at {}", request, target.display()),
    }
    resolved
}

fn match_alias(request: &str, root: &Path, aliases: Option<&AliasTable>) -> AliasMatch {
    let Some(table) = aliases else {
        return AliasMatch::NoMatch;
    };
    let Some(paths) = &table.paths else {
        return AliasMatch::NoMatch;
    };

    for (alias, targets) in paths {
        let prefix = strip_wildcard(alias);
        let Some(remainder) = request.strip_prefix(prefix) else {
            continue;
        };
        trace!("Matched alias '{}' for request '{}'", alias, request);

        let Some(first) = targets.first() else {
            return AliasMatch::Unmapped;
        };
        let replaced = format!("{}{}", strip_wildcard(first), remainder);
        return AliasMatch::Target(clean(root.join(&table.base_url).join(replaced)));
    }

    AliasMatch::NoMatch
}

fn strip_wildcard(pattern: &str) -> &str {
    pattern.strip_suffix("/*").unwrap_or(pattern)
}

fn resolve_file(target: &Path) -> Option<PathBuf> {
    RESOLVE_SUFFIXES.iter().find_map(|suffix| {
        let mut candidate = OsString::from(target.as_os_str());
        candidate.push(suffix);
        let candidate = PathBuf::from(candidate);
        // `is_file` rejects directories so `./components` falls through to `/index.ts`
        candidate.is_file().then_some(candidate)
    })
}
