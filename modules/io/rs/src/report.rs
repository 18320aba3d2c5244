use std::fs;
use std::path::{Path, PathBuf};

use derive_getters::{Dissolve, Getters};
use eyre::{Result, WrapErr};
use itertools::Itertools;

use optalign_alignment_rs::pairwise::{Alignments, Strategy};
use optalign_alignment_rs::Score;

/// Plain text report of optimal alignments:
///
/// ```text
/// Global alignment no. 1:
/// AC-
/// -CA
/// Score: -1
///
/// Global alignment no. 2:
/// -AC
/// CA-
/// Score: -1
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Report<S: Score> {
    strategy: Strategy,
    alignments: Alignments<S>,
}

impl<S: Score> Report<S> {
    pub const DEFAULT_DIR: &'static str = "output";

    pub fn new(strategy: Strategy, alignments: Alignments<S>) -> Self {
        Self {
            strategy,
            alignments,
        }
    }

    /// Numbered blocks separated by a blank line. The last block isn't terminated by a newline.
    pub fn render(&self) -> String {
        let score = self.alignments.score();
        self.alignments
            .iter()
            .enumerate()
            .map(|(ind, pair)| {
                format!(
                    "{} alignment no. {}:\n{}\n{}\nScore: {score}",
                    self.strategy.title(),
                    ind + 1,
                    pair.first(),
                    pair.second()
                )
            })
            .join("\n\n")
    }

    /// Writes the report to `dir/filename`, creating `dir` if needed.
    /// Returns the path of the saved file.
    pub fn save(&self, dir: impl AsRef<Path>, filename: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).wrap_err_with(|| {
            format!("Failed to create the output directory: {}", dir.display())
        })?;

        let path = dir.join(filename);
        fs::write(&path, self.render())
            .wrap_err_with(|| format!("Failed to write the report: {}", path.display()))?;
        log::info!("Saved {} alignment(s) to {}", self.alignments.len(), path.display());
        Ok(path)
    }

    /// Prints the report to stdout and saves it (see [`Report::save`]).
    pub fn emit(&self, dir: impl AsRef<Path>, filename: impl AsRef<Path>) -> Result<PathBuf> {
        println!("{}", self.render());
        self.save(dir, filename)
    }
}
