use std::fmt;

/// One section of an aggregate report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEntry {
    /// Header naming the root file
    Root { path: String },
    /// A dependency whose (compressed) content is included
    Inlined { path: String, lang: &'static str, content: String },
    /// A resolved dependency that is only mentioned by path
    ExternalRef { path: String },
    /// The root file's own (compressed) content, always last
    Origin { path: String, lang: &'static str, content: String },
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportEntry::Root { path } => write!(f, "ROOT:{path}\n---\n"),
            ReportEntry::Inlined { path, lang, content } => {
                write!(f, "FILE:{path}\n```{lang}\n{content}\n```\n")
            }
            ReportEntry::ExternalRef { path } => {
                write!(f, "EXTERNAL_REF:{path} (Conteúdo omitido)\n---\n")
            }
            ReportEntry::Origin { path, lang, content } => {
                write!(f, "ORIGIN:{path}\n```{lang}\n{content}\n```")
            }
        }
    }
}

/// Ordered report produced by one aggregation run.
///
/// Entries keep insertion order; the rendered text is the concatenation of
/// every entry's `Display` output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateReport {
    entries: Vec<ReportEntry>,
}

impl AggregateReport {
    pub(crate) fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Number of inlined dependencies (root excluded)
    pub fn inlined_count(&self) -> usize {
        self.entries.iter().filter(|e| matches!(e, ReportEntry::Inlined { .. })).count()
    }

    /// Number of dependencies referenced by path only
    pub fn external_count(&self) -> usize {
        self.entries.iter().filter(|e| matches!(e, ReportEntry::ExternalRef { .. })).count()
    }
}

impl fmt::Display for AggregateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
