use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

use crate::types::Specifier;

static FROM_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"from\s+['"](.*?)['"]"#).unwrap());

/// Scans source text for `from '<spec>'` / `from "<spec>"` clauses.
///
/// Matches are returned in source order and duplicates are kept; deduplication
/// happens on resolved paths during aggregation. Side-effect imports
/// (`import './polyfill'`), `require()` and dynamic `import()` are not matched.
pub fn imports_for(text: &str) -> Vec<Specifier> {
    let specs: Vec<Specifier> = FROM_CLAUSE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let request = caps.get(1)?.as_str().to_string();
            trace!("Found static import: '{}' at offset {}", request, whole.start());
            Some(Specifier { request, offset: whole.start() })
        })
        .collect();
    debug!("Found {} import specifiers", specs.len());
    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requests(text: &str) -> Vec<String> {
        imports_for(text).into_iter().map(|s| s.request).collect()
    }

    #[test]
    fn test_static_import_default() {
        assert_eq!(requests("import foo from './foo';"), vec!["./foo"]);
    }

    #[test]
    fn test_static_import_named_double_quotes() {
        assert_eq!(requests("import { bar, baz } from \"./utils\";"), vec!["./utils"]);
    }

    #[test]
    fn test_multiline_named_import() {
        let src = "import {\n  a,\n  b,\n} from\n  '@app/things';";
        assert_eq!(requests(src), vec!["@app/things"]);
    }

    #[test]
    fn test_export_from_is_matched() {
        assert_eq!(requests("export { x } from './x';"), vec!["./x"]);
    }

    #[test]
    fn test_side_effect_and_require_not_matched() {
        let src = "import './polyfills';\nconst fs = require('fs');\nimport('./lazy');";
        assert!(requests(src).is_empty());
    }

    #[test]
    fn test_source_order_and_duplicates_kept() {
        let src = "import a from './a';\nimport b from 'b';\nimport { c } from './a';";
        let specs = imports_for(src);
        assert_eq!(
            specs.iter().map(|s| s.request.as_str()).collect::<Vec<_>>(),
            vec!["./a", "b", "./a"]
        );
        assert!(specs[0].offset < specs[1].offset);
        assert!(specs[1].offset < specs[2].offset);
    }

    #[test]
    fn test_offset_points_at_from_keyword() {
        let src = "import x from './x';";
        let specs = imports_for(src);
        assert_eq!(&src[specs[0].offset..specs[0].offset + 4], "from");
    }

    #[test]
    fn test_no_imports() {
        assert!(imports_for("const x = 42;").is_empty());
    }
}
