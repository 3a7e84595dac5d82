use crate::board::CellState;

/// Conway's B3/S23: birth on exactly 3 live neighbors, survival on 2 or 3.
pub struct Rule;

impl Rule {
    pub const BIRTH: usize = 3;
    pub const SURVIVE: [usize; 2] = [2, 3];

    pub fn next_state(current: CellState, alive_neighbors: usize) -> CellState {
        let alive = match current {
            CellState::Alive => Self::SURVIVE.contains(&alive_neighbors),
            CellState::Dead => alive_neighbors == Self::BIRTH,
        };

        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cells_survive_only_on_two_or_three() {
        for neighbors in 0..=8 {
            let expected = if neighbors == 2 || neighbors == 3 {
                CellState::Alive
            } else {
                CellState::Dead
            };

            assert_eq!(Rule::next_state(CellState::Alive, neighbors), expected, "{neighbors} neighbors");
        }
    }

    #[test]
    fn dead_cells_are_born_only_on_three() {
        for neighbors in 0..=8 {
            let expected = if neighbors == 3 {
                CellState::Alive
            } else {
                CellState::Dead
            };

            assert_eq!(Rule::next_state(CellState::Dead, neighbors), expected, "{neighbors} neighbors");
        }
    }
}
