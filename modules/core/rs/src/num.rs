use std::fmt::{Debug, Display};
use std::hash::Hash;

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}
impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// Alignment scores: signed primitive integers printable in reports.
pub trait Score: PrimInt + ::num::Signed + Display + Hash + Send + Sync + 'static {}

impl<T: PrimInt + ::num::Signed + Display + Hash + Send + Sync + 'static> Score for T {}
