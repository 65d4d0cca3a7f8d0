/// A static import specifier found while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    pub request: String,
    /// Byte offset of the `from` keyword in the scanned text
    pub offset: usize,
}

/// Path aliases loaded from the project's `tsconfig.json`/`jsconfig.json`.
///
/// `paths` keeps the definition order of the config file; resolution commits
/// to the first alias whose prefix matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    pub base_url: String,
    pub paths: Option<Vec<(String, Vec<String>)>>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self { base_url: ".".to_string(), paths: None }
    }
}

impl AliasTable {
    pub fn new(base_url: impl Into<String>, paths: Vec<(String, Vec<String>)>) -> Self {
        Self { base_url: base_url.into(), paths: Some(paths) }
    }

    pub fn len(&self) -> usize {
        self.paths.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
