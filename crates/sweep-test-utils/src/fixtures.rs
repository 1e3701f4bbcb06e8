//! Reusable maze fixtures.
//!
//! - [`open_room`]: n×n floor with no walls; the grid edge is the only
//!   boundary.
//! - [`walled_room`]: n×n with an obstacle border.
//! - [`comb_maze`]: dead-end corridors that force path planning.
//! - [`two_rooms`]: two rooms joined by a single doorway.
//!
//! Every fixture starts with zero dirt and a zero dirt probability.

use crate::GridWorld;

/// Text for an n×n room with the start near the centre, optionally
/// bordered by obstacles.
pub fn room_text(n: usize, walled: bool) -> String {
    let centre = n / 2;
    let mut text = String::with_capacity(n * (n + 1));
    for row in 0..n {
        for col in 0..n {
            let border = row == 0 || col == 0 || row == n - 1 || col == n - 1;
            let glyph = if row == centre && col == centre {
                'S'
            } else if walled && border {
                '#'
            } else {
                '.'
            };
            text.push(glyph);
        }
        text.push('\n');
    }
    text
}

/// n×n open floor, start at `(n/2, n/2)`.
pub fn open_room(n: usize) -> GridWorld {
    GridWorld::parse(&room_text(n, false)).expect("open room is well-formed")
}

/// n×n room whose outer ring is obstacles, start at `(n/2, n/2)`.
/// Needs `n >= 3`.
pub fn walled_room(n: usize) -> GridWorld {
    GridWorld::parse(&room_text(n, true)).expect("walled room is well-formed")
}

pub const COMB_MAZE: &str = "
    #########
    #S......#
    #.#.#.#.#
    #.#.#.#.#
    #.#.#.#.#
    #########
";

/// Four teeth hanging off a top corridor.
pub fn comb_maze() -> GridWorld {
    GridWorld::parse(COMB_MAZE).expect("comb maze is well-formed")
}

pub const TWO_ROOMS: &str = "
    ###########
    #....#....#
    #....#....#
    #S........#
    #....#....#
    ###########
";

/// Two 4×4 rooms sharing a one-cell doorway.
pub fn two_rooms() -> GridWorld {
    GridWorld::parse(TWO_ROOMS).expect("two rooms is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweep_core::Position;

    #[test]
    fn open_room_has_no_obstacles() {
        let w = open_room(5);
        assert_eq!(w.floor_cells().len(), 25);
        assert_eq!(w.agent(), Position::new(2, 2));
    }

    #[test]
    fn walled_room_interior() {
        let w = walled_room(5);
        assert_eq!(w.floor_cells().len(), 9);
        assert!(w.is_blocked(Position::new(0, 2)));
    }

    #[test]
    fn mazes_parse() {
        let comb = comb_maze();
        assert_eq!((comb.rows(), comb.cols()), (6, 9));
        assert_eq!(comb.floor_cells().len(), 7 + 4 * 3);
        let rooms = two_rooms();
        assert_eq!(rooms.side(), 11);
        assert_eq!(rooms.floor_cells().len(), 16 + 16 + 1);
    }
}
