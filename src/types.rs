use crate::{Color, Move, FACTORIES_CAPACITY, FACTORY_LEN};
use smallvec::SmallVec;
use std::collections::BTreeSet;

/// The [colors](Color) of the tiles on one factory. The order of the tiles carries no meaning.
///
/// # See Also
///
/// * [FACTORY_LEN]
/// * [Factories]
/// * [legal_moves](crate::legal_moves)
pub type Factory = SmallVec<[Color; FACTORY_LEN]>;
/// A vector of every factory in the game, where each factory is a vector of
/// [colors](Color). Indexes match [Source::Factory](crate::Source::Factory).
///
/// # See Also
///
/// * [FACTORIES_CAPACITY]
/// * [Factory]
/// * [legal_moves](crate::legal_moves)
pub type Factories = SmallVec<[Factory; FACTORIES_CAPACITY]>;
/// An ordered set of [moves](Move).
///
/// # See Also
///
/// * [Move]
/// * [legal_moves](crate::legal_moves)
pub type Moves = BTreeSet<Move>;
