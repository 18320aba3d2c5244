pub use delegate::Delegate;

pub use crate::Score;

mod delegate;
pub mod gaps;
pub mod symbols;

/// A complete scoring scheme: symbol substitution scores plus the gap penalty.
pub trait Scheme:
    gaps::Scorer<Score = <Self as Scheme>::Score>
    + symbols::Scorer<Score = <Self as Scheme>::Score, Symbol = <Self as Scheme>::Symbol>
{
    type Score: Score;
    type Symbol;
}

/// Substitution table lookups with a linear gap penalty: the scoring model of a typical
/// Needleman-Wunsch / Smith-Waterman run driven by an external substitution matrix.
pub type ScoringModel<S> = Delegate<S, u8, symbols::SubstitutionTable<S>, gaps::Linear<S>>;

pub fn compose<ScoreType, Symbol, S, G>(symbols: S, gaps: G) -> Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    Delegate::new(symbols, gaps)
}
