use crate::tt::DEFAULT_STALE_AGES;

/// Tunable search configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    pub null_move: bool,
    pub null_reduction: u32,
    pub null_min_depth: u32,
    pub lmr: bool,
    pub lmr_min_depth: u32,
    pub lmr_min_move: usize,
    pub max_qsearch_depth: u32,
    /// Material lead (centipawns) above which a repetition counts as a loss of advantage
    pub repetition_margin: i32,
    /// Magnitude of the repetition bias
    pub repetition_contempt: i32,
    /// Transposition table capacity in entries
    pub tt_capacity: usize,
    pub tt_stale_ages: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            null_move: true,
            null_reduction: 2,
            null_min_depth: 3,
            lmr: true,
            lmr_min_depth: 3,
            lmr_min_move: 3,
            max_qsearch_depth: 8,
            repetition_margin: 100,
            repetition_contempt: 150,
            tt_capacity: 1 << 18,
            tt_stale_ages: DEFAULT_STALE_AGES,
        }
    }
}

impl SearchParams {
    #[must_use]
    pub fn with_null_move(mut self, enabled: bool) -> Self {
        self.null_move = enabled;
        self
    }

    #[must_use]
    pub fn with_lmr(mut self, enabled: bool) -> Self {
        self.lmr = enabled;
        self
    }

    #[must_use]
    pub fn with_max_qsearch_depth(mut self, depth: u32) -> Self {
        self.max_qsearch_depth = depth;
        self
    }

    #[must_use]
    pub fn with_repetition_bias(mut self, margin: i32, contempt: i32) -> Self {
        self.repetition_margin = margin;
        self.repetition_contempt = contempt;
        self
    }

    #[must_use]
    pub fn with_tt_capacity(mut self, entries: usize) -> Self {
        self.tt_capacity = entries;
        self
    }
}
