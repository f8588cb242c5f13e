use super::rng::RandomSource;
use super::space::{Position, Space};

/// Pick a free cell for the next piece of food
///
/// Free cells are listed in scan order (see [`Space::cells`]) and the one
/// at `floor(next_unit() * free_count)` is chosen, so the result depends
/// only on the generator stream and the blocked cells. Returns `None`
/// when every cell is blocked; the generator is not advanced in that case.
///
/// Rebuilds the free list on every call, which is O(volume). Fine for
/// boards up to a few thousand cells.
pub fn place_target<R: RandomSource + ?Sized>(
    space: &Space,
    blocked: &[Position],
    rng: &mut R,
) -> Option<Position> {
    let mut occupied = vec![false; space.volume()];
    for index in blocked.iter().filter_map(|&pos| space.index_of(pos)) {
        occupied[index] = true;
    }

    let free: Vec<Position> = occupied
        .iter()
        .enumerate()
        .filter(|(_, taken)| !**taken)
        .map(|(index, _)| space.position_at(index))
        .collect();

    if free.is_empty() {
        return None;
    }

    let pick = (rng.next_unit() * free.len() as f64).floor() as usize;
    // Guards against a source that returns exactly 1.0.
    free.get(pick.min(free.len() - 1)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rng::Lcg;

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_zero_picks_first_free_cell() {
        let space = Space::planar(3, 3);
        let blocked = [Position::new(0, 0), Position::new(1, 0)];
        let food = place_target(&space, &blocked, &mut Fixed(0.0));
        assert_eq!(food, Some(Position::new(2, 0)));
    }

    #[test]
    fn test_last_free_cell_for_values_near_one() {
        let space = Space::planar(3, 3);
        let blocked = [Position::new(2, 2)];
        let food = place_target(&space, &blocked, &mut Fixed(0.999));
        assert_eq!(food, Some(Position::new(1, 2)));
    }

    #[test]
    fn test_single_free_cell_in_volume() {
        let space = Space::volumetric(2, 2, 2);
        let blocked = [
            Position::new3(0, 0, 0),
            Position::new3(1, 0, 0),
            Position::new3(0, 1, 0),
            Position::new3(1, 1, 0),
            Position::new3(0, 0, 1),
            Position::new3(1, 0, 1),
            Position::new3(0, 1, 1),
        ];
        let food = place_target(&space, &blocked, &mut Fixed(0.0));
        assert_eq!(food, Some(Position::new3(1, 1, 1)));
    }

    #[test]
    fn test_full_space_yields_none() {
        let space = Space::planar(2, 2);
        let blocked: Vec<Position> = space.cells().collect();
        let mut rng = Lcg::new(9);
        let before = rng;

        assert_eq!(place_target(&space, &blocked, &mut rng), None);
        assert_eq!(rng, before);
    }

    #[test]
    fn test_never_lands_on_blocked_cell() {
        let space = Space::planar(6, 6);
        let blocked: Vec<Position> = (0..6).map(|x| Position::new(x, 3)).collect();
        let mut rng = Lcg::new(11);

        for _ in 0..500 {
            let food = place_target(&space, &blocked, &mut rng).unwrap();
            assert!(!blocked.contains(&food));
            assert!(space.is_in_bounds(food));
        }
    }

    #[test]
    fn test_out_of_bounds_blocked_cells_ignored() {
        let space = Space::planar(2, 1);
        let blocked = [Position::new(-1, 0), Position::new(0, 0)];
        let food = place_target(&space, &blocked, &mut Fixed(0.0));
        assert_eq!(food, Some(Position::new(1, 0)));
    }
}
