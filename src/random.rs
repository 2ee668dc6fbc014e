use crate::{
    Color, Column, Coordinate, Factories, Factory, Row, Wall, FACTORIES_CAPACITY, FACTORY_LEN,
    WALL_SIZE,
};
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use tap::Tap;

/// A random [coordinate](Coordinate) anywhere on the [wall](Wall).
pub fn random_coordinate<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
    let possible_indexes = Uniform::from(0..WALL_SIZE);
    (
        Row::rows()[possible_indexes.sample(rng)],
        Column::columns()[possible_indexes.sample(rng)],
    )
}

/// Occupies a random, small, non-zero number of distinct empty cells on the wall.
///
/// # Returns
///
/// The number of newly occupied cells.
pub fn random_wall<R: Rng + ?Sized>(rng: &mut R, wall: &mut Wall) -> usize {
    let empty_cells: Vec<Coordinate> = Row::rows()
        .into_iter()
        .flat_map(|row| Column::columns().map(|column| (row, column)))
        .filter(|&coordinate| !wall.is_occupied(coordinate))
        .collect::<Vec<_>>()
        .tap_mut(|cells| cells.shuffle(rng));
    if empty_cells.is_empty() {
        return 0;
    }

    let occupied_len = rng.gen_range(1..=empty_cells.len());
    for &coordinate in &empty_cells[..occupied_len] {
        // cells are distinct and were empty
        let _ = wall.occupy(coordinate);
    }

    occupied_len
}

/// A new [color](Color) which is randomly different from `color`.
pub fn random_other_color<R: Rng + ?Sized>(rng: &mut R, color: Color) -> Color {
    let possible_indexes = Uniform::from(0..Color::COLORS_LEN - 1);
    let random_index = possible_indexes.sample(rng);
    // removing the color at its own index in the array colors
    let random_different_index = random_index + if random_index < color as usize { 0 } else { 1 };
    Color::colors()[random_different_index]
}

/// Pushes a random, small, non-zero number of factories into factories, each holding
/// [FACTORY_LEN] random [colors](Color).
///
/// # Returns
///
/// The number of additional factories.
pub fn random_factories<R: Rng + ?Sized>(rng: &mut R, factories: &mut Factories) -> usize {
    let factories_len = rng.gen_range(1..=FACTORIES_CAPACITY);
    for _ in 0..factories_len {
        factories.push((0..FACTORY_LEN).map(|_| rng.gen()).collect::<Factory>());
    }

    factories_len
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn random_wall_empty() {
        let mut wall = Wall::new();

        let occupied_len = random_wall(&mut rand::thread_rng(), &mut wall);

        assert!(occupied_len > 0);
        assert_eq!(occupied_len, wall.occupied_len());
    }

    #[test]
    fn random_wall_full() {
        let mut wall = Wall::from_cells([[true; WALL_SIZE]; WALL_SIZE]);

        assert_eq!(0, random_wall(&mut rand::thread_rng(), &mut wall));
    }

    #[test]
    fn random_other_color_single_sample() {
        let mut rng = rand::thread_rng();
        let color = rng.gen();

        assert_ne!(color, random_other_color(&mut rng, color));
    }

    #[test]
    fn random_other_color_covers_other_colors() {
        let mut rng = rand::thread_rng();
        let color = rng.gen();

        let others = (0..1_000)
            .map(|_| random_other_color(&mut rng, color))
            .unique()
            .count();

        assert_eq!(Color::COLORS_LEN - 1, others);
    }

    #[test]
    fn random_factories_empty() {
        let mut factories = Factories::new();

        let factories_len = random_factories(&mut rand::thread_rng(), &mut factories);

        assert_eq!(factories_len, factories.len());
        for factory in &factories {
            assert_eq!(FACTORY_LEN, factory.len());
        }
    }
}
