use crate::Color;
use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of rows and the number of columns on the [wall](crate::Wall). `5` by `5`.
///
/// # See Also
///
/// * [Row](crate::Row)
/// * [Column](crate::Column)
/// * [WALL_PATTERN](crate::WALL_PATTERN)
pub const WALL_SIZE: usize = 5;
const _: () = assert!(WALL_SIZE == Color::COLORS_LEN);
/// The number of [pattern lines](crate::PatternLine) for each player. One for every row on
/// the [wall](crate::Wall).
///
/// # See Also
///
/// * [PatternLines](crate::PatternLines)
pub const PATTERN_LINES_LEN: usize = WALL_SIZE;
/// The number of tiles drawn onto a full factory. `4` tiles.
///
/// # See Also
///
/// * [Factory](crate::Factory)
pub const FACTORY_LEN: usize = 4;
/// All factories will be stored on the stack until the number of factories becomes greater
/// than `FACTORIES_CAPACITY`. When there are more than `FACTORIES_CAPACITY` factories, they
/// will be heap allocated. If the environment variable named `FACTORIES_CAPACITY` is present
/// at compile time and is able to be parsed into a `usize`, set to the value of the
/// environment variable. Otherwise, it is set to `9`, the number of factories in a game
/// with four players.
///
/// # See Also
///
/// * [Factories](crate::Factories)
/// * [legal_moves](crate::legal_moves)
pub const FACTORIES_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("FACTORIES_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    9
);
const _: () = assert!(FACTORIES_CAPACITY > 0);
