//! Rules which decide where a tile may be placed on a player's board and how many points it
//! earns once it reaches the wall, for a tile-laying game with five [colors](Color).
//!
//! ## Summary
//!
//! Each player owns a [wall](Wall) of [WALL_SIZE] by [WALL_SIZE] cells and one
//! [pattern line](PatternLine) for every row of the wall. Players take every tile of one
//! [color](Color) from a [factory](Factory) or the center and put them on a pattern line or
//! their floor. Once a pattern line is full, one of its tiles moves to the wall and scores
//! points. The game ends after some player completes a row on the wall, and completed rows,
//! columns and colors are counted for bonuses.
//!
//! This crate only answers questions about state owned by the caller. Drawing tiles, taking
//! turns, choosing moves and turning floor tiles or completed sets into points are left to
//! the caller.
//!
//! ## What does the wall look like?
//!
//! Every cell on the wall has a fixed [color](Color) given by [WALL_PATTERN]. Each row and each
//! column contains every [color](Color) exactly once, so [color_at] and [column_for] are
//! inverses of each other for every [row](Row).
//!
//! ## Where may tiles be placed?
//!
//! Tiles of some [color](Color) may be put on the [pattern line](PatternLine) at some
//! [row](Row) when the line is either empty or already holds that [color](Color), and the
//! cell where that [color](Color) belongs in that row of the [wall](Wall) is still empty.
//! Implemented by [legal_pattern_line_row].
//!
//! The floor accepts any tiles from any source, so [legal_moves] always offers it.
//! Tiles which do not fit on a pattern line overflow to the floor, which
//! [PatternLine::add_tiles] reports back to the caller.
//!
//! ## How are points calculated?
//!
//! When a tile moves to the wall through [PatternLine::flush], [score_for_placement] counts
//! the tiles connected to it horizontally and vertically. A tile with no neighbors earns `1`
//! point. Otherwise, it earns the length of each run longer than `1` it belongs to, so a
//! tile joining a row and a column is counted twice.
//!
//! ## How is the game ended?
//!
//! The game ends after the round in which any [wall](Wall) [has a complete row](Wall::has_complete_row).
//! [complete_rows], [complete_columns] and [complete_colors] count what each player finished.
//!
//! ## What happens with invalid arguments?
//!
//! [Rows](Row) and [columns](Column) can only be created inside the wall, and
//! [colors](Color) can only be created from known indexes, so queries never see values
//! outside their domain. Operations on invalid state return an error describing every
//! violated condition instead of guessing.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use color::*;
pub use consts::*;
pub use coordinate::*;
pub use endgame::*;
pub use pattern_line::*;
pub use placement::*;
#[cfg(test)]
pub use random::*;
pub use scoring::*;
pub use types::*;
pub use wall::*;
pub use wall_pattern::*;

mod color;
mod consts;
mod coordinate;
mod endgame;
mod pattern_line;
mod placement;
#[cfg(test)]
mod random;
mod scoring;
mod types;
mod wall;
mod wall_pattern;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_round() {
        let mut wall = Wall::new();
        let mut pattern_lines = new_pattern_lines();
        let row = Row::rows()[1];
        let factories: Factories = [[Color::Red, Color::Red, Color::Red, Color::White]]
            .into_iter()
            .map(Factory::from_iter)
            .collect();

        let moves = legal_moves(Color::Red, &factories, &[], &pattern_lines, &wall).unwrap();
        let chosen = Move {
            source: Source::Factory(0),
            color: Color::Red,
            destination: Destination::PatternLine(row),
        };
        assert!(moves.contains(&chosen));

        let overflow = pattern_lines[row.index()]
            .add_tiles(Color::Red, 3, &wall)
            .unwrap();
        assert_eq!(1, overflow);

        let flush = pattern_lines[row.index()].flush(&mut wall).unwrap();
        assert_eq!(1, flush.discarded);
        assert_eq!(Color::Red, color_at(flush.coordinate.0, flush.coordinate.1));
        assert_eq!(Ok(1), score_for_placement(&wall, flush.coordinate));

        assert!(!legal_pattern_line_row(row, Color::Red, &pattern_lines, &wall));
        assert_eq!(EndgameCounts::default(), endgame_counts(&wall));
    }
}
