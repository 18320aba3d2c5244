use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use derive_getters::Dissolve;
use eyre::{ensure, eyre, OptionExt, Result, WrapErr};

use super::validate;
use optalign_alignment_rs::pairwise::scoring::symbols::{MissingPair, SubstitutionTable};
use optalign_alignment_rs::Score;

/// Reader for comma-separated substitution tables:
///
/// ```text
///  ,A,C,G,T
/// A,1,-1,-2,-1
/// C,-1,1,-1,-2
/// ...
/// ```
///
/// The header lists the column symbols (second sequence), its first cell is ignored. Every
/// following line starts with a row symbol (first sequence) followed by one integer score per
/// column. Blank lines and whitespace around cells are ignored.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Dissolve)]
pub struct Reader<R> {
    reader: R,
}

impl Reader<()> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Reader<BufReader<File>>> {
        let path = path.as_ref();
        let file = File::open(path).wrap_err_with(|| {
            format!("Failed to open the substitution table: {}", path.display())
        })?;
        Ok(Reader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Reads the whole table. Pairs absent from the table are handled according to `missing`.
    pub fn read<S>(self, missing: MissingPair) -> Result<SubstitutionTable<S>>
    where
        S: Score + FromStr,
        <S as FromStr>::Err: Display,
    {
        let mut lines = self
            .reader
            .lines()
            .enumerate()
            .map(|(ind, line)| {
                line.map(|x| (ind + 1, x)).wrap_err_with(|| {
                    format!("Failed to read line {} of the substitution table", ind + 1)
                })
            })
            .filter(|x| x.as_ref().map_or(true, |(_, line)| !line.trim().is_empty()));

        let (lineno, header) = lines
            .next()
            .transpose()?
            .ok_or_eyre("Substitution table is empty")?;
        let cols = labels(header.split(',').skip(1), "column", lineno)?;
        ensure!(
            !cols.is_empty(),
            "Substitution table header (line {lineno}) has no column symbols"
        );

        let (mut rows, mut scores) = (Vec::new(), Vec::new());
        for line in lines {
            let (lineno, line) = line?;
            let mut cells = line.split(',');

            // split always yields at least one item
            let label = cells.next().unwrap_or_default();
            let label = validate::label(label)
                .wrap_err_with(|| format!("Invalid row symbol at line {lineno}"))?;
            ensure!(
                !rows.contains(&label),
                "Duplicated row symbol '{}' at line {lineno}",
                label as char
            );

            let row = cells
                .map(|cell| {
                    let cell = cell.trim();
                    cell.parse::<S>()
                        .map_err(|err| eyre!("Invalid score '{cell}' at line {lineno}: {err}"))
                })
                .collect::<Result<Vec<S>>>()?;
            ensure!(
                row.len() == cols.len(),
                "Row at line {lineno} has {} scores, expected one per column ({})",
                row.len(),
                cols.len()
            );

            rows.push(label);
            scores.push(row);
        }
        ensure!(!rows.is_empty(), "Substitution table has no score rows");

        log::debug!(
            "Loaded {} x {} substitution table, missing pairs policy: {missing}",
            rows.len(),
            cols.len()
        );
        Ok(SubstitutionTable::new(rows, cols, scores)?.with_missing(missing))
    }
}

fn labels<'a>(cells: impl Iterator<Item = &'a str>, axis: &str, lineno: usize) -> Result<Vec<u8>> {
    let mut labels = Vec::new();
    for cell in cells {
        let label = validate::label(cell)
            .wrap_err_with(|| format!("Invalid {axis} symbol at line {lineno}"))?;
        ensure!(
            !labels.contains(&label),
            "Duplicated {axis} symbol '{}' at line {lineno}",
            label as char
        );
        labels.push(label);
    }
    Ok(labels)
}
