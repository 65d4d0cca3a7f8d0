use std::path::Path;

use crate::constants::{SUPPORTED_EXTENSIONS, TYPESCRIPT_EXTENSIONS};

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase)
}

/// Whether a file's content can be inlined into a report.
pub fn is_supported(path: &Path) -> bool {
    lowercase_extension(path).is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Code fence language tag for a file: `ts` for TypeScript sources, `js` for everything else.
pub fn lang_for(path: &Path) -> &'static str {
    match lowercase_extension(path) {
        Some(ext) if TYPESCRIPT_EXTENSIONS.contains(&ext.as_str()) => "ts",
        _ => "js",
    }
}
