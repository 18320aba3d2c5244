use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};
use eyre::Result;

use optalign_alignment_rs::pairwise::scoring::symbols::MissingPair;
use optalign_alignment_rs::pairwise::traceback;
use optalign_alignment_rs::pairwise::Strategy;
use optalign_core_rs::Sequence;

/// Command-line arguments shared by the global and the local aligner.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Args {
    /// First sequence of nucleotides
    #[arg(long, value_name = "STR")]
    pub seq1: Sequence,

    /// Second sequence of nucleotides
    #[arg(long, value_name = "STR")]
    pub seq2: Sequence,

    /// Maximum count of optimal alignments
    #[arg(short = 'n', value_name = "INT")]
    pub n: usize,

    /// Substitution matrix in CSV format
    #[arg(short = 's', long, value_name = "CSV")]
    pub substitution_matrix: PathBuf,

    /// Constant penalty of aligning a symbol against a gap ('-')
    #[arg(
        short = 'g',
        long,
        value_name = "INT",
        default_value = "-2",
        allow_negative_numbers = true
    )]
    pub gap_penalty: i32,

    /// Output filename, the file is saved inside --output-dir
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: PathBuf,

    /// Directory for the output file
    #[arg(long, value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Handling of symbol pairs absent from the substitution matrix: 'fail' or 'zero'
    #[arg(long, value_name = "POLICY", default_value = "fail")]
    pub missing_pair: MissingPair,

    /// Stop the traceback after visiting this many states
    #[arg(long, value_name = "INT", default_value = "1048576")]
    pub max_visited: usize,
}

impl Args {
    /// Command line interface of the tool running the given strategy.
    pub fn command_for(strategy: Strategy) -> clap::Command {
        match strategy {
            Strategy::Global => Self::command()
                .name("needleman-wunsch")
                .about("Needleman-Wunsch (NW) algorithm for global alignment"),
            Strategy::Local => Self::command()
                .name("smith-waterman")
                .about("Smith-Waterman (SW) algorithm for local alignment"),
        }
    }

    /// Parses the process arguments, exits with a usage message on invalid input.
    pub fn parse_for(strategy: Strategy) -> Result<Self> {
        let matches = Self::command_for(strategy).get_matches();
        Ok(Self::from_arg_matches(&matches)?)
    }

    pub fn traceback(&self) -> traceback::Config {
        traceback::Config::new(self.n, self.max_visited)
    }
}
