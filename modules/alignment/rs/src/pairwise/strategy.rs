use std::fmt::{Display, Formatter};
use std::str::FromStr;

use eyre::{bail, Result};

/// Dynamic programming strategy used to fill the alignment matrices and to trace them back.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Strategy {
    /// Needleman-Wunsch: the alignment spans both sequences end-to-end.
    Global,
    /// Smith-Waterman: the alignment is confined to the best scoring subregion.
    /// Scores never drop below 0.
    Local,
}

impl Strategy {
    /// Returns true if cell scores are clamped at zero.
    pub fn is_local(&self) -> bool {
        matches!(self, Strategy::Local)
    }

    /// Capitalized name used in reports, e.g. "Global alignment no. 1".
    pub fn title(&self) -> &'static str {
        match self {
            Strategy::Global => "Global",
            Strategy::Local => "Local",
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Global => write!(f, "global"),
            Strategy::Local => write!(f, "local"),
        }
    }
}

impl FromStr for Strategy {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "global" => Ok(Strategy::Global),
            "local" => Ok(Strategy::Local),
            _ => bail!("Strategy must be 'global' or 'local', got '{s}'"),
        }
    }
}
