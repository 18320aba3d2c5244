use eyre::{ensure, Result};

use optalign_alignment_rs::GAP;

/// Parses a row/column label: exactly one printable ASCII symbol other than the gap.
pub fn label(cell: &str) -> Result<u8> {
    let cell = cell.trim();
    ensure!(!cell.is_empty(), "Substitution table label cannot be empty");
    ensure!(
        cell.len() == 1,
        "Substitution table label must be a single symbol, got '{cell}'"
    );

    let symbol = cell.as_bytes()[0];
    ensure!(
        symbol.is_ascii_graphic(),
        "Substitution table label must be a printable ASCII symbol, got {symbol:#04x}"
    );
    ensure!(
        symbol != GAP,
        "The gap symbol '{}' can't be a substitution table label",
        GAP as char
    );
    Ok(symbol)
}
