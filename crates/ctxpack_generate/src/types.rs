use ctxpack_history::RecordOutcome;

#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Root file path relative to the project root
    pub root_file: String,
    /// Rendered report text
    pub report: String,
    pub inlined: usize,
    pub external: usize,
    /// None when the run was a dry run
    pub outcome: Option<RecordOutcome>,
}
