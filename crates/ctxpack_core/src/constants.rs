//! Constants for file extensions and resolution strategies.
//!
//! ## Supported Extensions
//!
//! Only four extensions are inlined into a report:
//!
//! - **TypeScript**: `.ts`, `.tsx` (tagged `ts`)
//! - **JavaScript**: `.js`, `.jsx` (tagged `js`)
//!
//! Anything else that resolves (stylesheets, JSON, `.mjs`, ...) is only
//! mentioned by path.

/// Extensions whose content is inlined into the report (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Extensions tagged as TypeScript in report code fences
pub const TYPESCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Suffixes appended to a target path when probing the filesystem (in priority order)
pub const RESOLVE_SUFFIXES: &[&str] =
    &["", ".ts", ".tsx", ".js", ".jsx", "/index.ts", "/index.tsx", ".css", ".scss", ".json"];

/// Project config files consulted for path aliases, first existing wins
pub const PROJECT_CONFIG_FILES: &[&str] = &["tsconfig.json", "jsconfig.json"];
