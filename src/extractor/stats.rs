#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractStats {
    pub lines_read: u64,
    pub records_emitted: u64,
    pub ids_remaining: usize,
    /// Set when the scan ended because every identifier was found.
    pub stopped_early: bool,
}
