use derive_getters::Getters;

/// Limits of the traceback search.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters)]
pub struct Config {
    /// Maximum number of distinct optimal alignments to report.
    limit: usize,
    /// Maximum number of search states to visit before giving up.
    max_visited: usize,
}

impl Config {
    pub const DEFAULT_MAX_VISITED: usize = 1 << 20;

    pub fn new(limit: usize, max_visited: usize) -> Self {
        Self { limit, max_visited }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_max_visited(mut self, max_visited: usize) -> Self {
        self.max_visited = max_visited;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: 1,
            max_visited: Self::DEFAULT_MAX_VISITED,
        }
    }
}
