use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use eyre::{ensure, Result};

use crate::alignment::Alignable;
use crate::GAP;

/// An immutable sequence of symbols with the following guarantees:
/// - Every symbol is a printable, non-whitespace ASCII character.
/// - The gap symbol ('-') never appears inside the sequence.
///
/// The alphabet itself is not restricted: whatever symbols the scoring table knows are valid.
/// The sequence may be empty.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub struct Sequence {
    symbols: Arc<[u8]>,
}

impl Sequence {
    pub fn new(symbols: impl Into<Vec<u8>>) -> Result<Self> {
        let symbols = symbols.into();
        Self::validate(&symbols)?;
        Ok(Self {
            symbols: symbols.into(),
        })
    }

    pub fn validate(symbols: &[u8]) -> Result<()> {
        for (pos, symbol) in symbols.iter().enumerate() {
            ensure!(
                symbol.is_ascii_graphic(),
                "Sequence symbols must be printable ASCII characters, \
                 got {symbol:#04x} at position {pos}"
            );
            ensure!(
                *symbol != GAP,
                "The gap symbol '{}' is reserved and can't be a part of the sequence \
                 (position {pos})",
                GAP as char
            );
        }
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }
}

impl Alignable for Sequence {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.symbols[pos]
    }
}

impl FromStr for Sequence {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.as_bytes())
    }
}

impl TryFrom<&str> for Sequence {
    type Error = eyre::Report;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Validated ASCII -> every byte is a char
        for symbol in self.symbols.iter() {
            write!(f, "{}", *symbol as char)?;
        }
        Ok(())
    }
}
