use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// Describes the color of a tile. Every tile in the game is exactly one color and
/// carries no other property.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
pub enum Color {
    /// `0`.
    Blue = 0,
    /// `1`.
    Yellow = 1,
    /// `2`.
    Red = 2,
    /// `3`.
    Black = 3,
    /// `4`.
    White = 4,
}

/// Describes the reason why a [`Color`] could not be created from an index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ColorError {
    /// Attempting to convert an index outside of `0..Color::COLORS_LEN`.
    Unrecognized(usize),
}

impl Color {
    /// The number of [`Color`] variants. 5 colors.
    pub const COLORS_LEN: usize = 5;

    /// # Returns
    ///
    /// An array of all [`Color`] variants in order.
    #[inline]
    pub fn colors() -> [Color; Color::COLORS_LEN] {
        [
            Color::Blue,
            Color::Yellow,
            Color::Red,
            Color::Black,
            Color::White,
        ]
    }
}

impl TryFrom<usize> for Color {
    type Error = ColorError;

    /// # Errors
    ///
    /// * [`ColorError::Unrecognized`] when `index` is not in `0..Color::COLORS_LEN`.
    #[inline]
    fn try_from(index: usize) -> Result<Color, ColorError> {
        num::FromPrimitive::from_usize(index).ok_or(ColorError::Unrecognized(index))
    }
}

impl Distribution<Color> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let index = rng.gen_range(0..Color::COLORS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            dbg!(index, Color::COLORS_LEN);
            unreachable!(
                "index ({:?}) should be matched since colors cover all indexes \
                in range 0..Color::COLORS_LEN (0..{:?}).",
                index,
                Color::COLORS_LEN
            );
        })
    }
}
