// rules.rs - Conway's transition rule (B3/S23)

use crate::grid::Cell;

/// State of a cell in the next generation given its current state and the
/// number of alive neighbours.
pub fn next_state(current: Cell, alive_neighbors: u8) -> Cell {
    match (current, alive_neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3)                     => Cell::Alive, // Birth
        _                                   => Cell::Dead,  // Under/overpopulation or stays dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_table_is_exhaustive() {
        for count in 0..=8u8 {
            let survives = if (2..=3).contains(&count) { Cell::Alive } else { Cell::Dead };
            let born = if count == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(next_state(Cell::Alive, count), survives, "alive with {count}");
            assert_eq!(next_state(Cell::Dead, count), born, "dead with {count}");
        }
    }

    #[test]
    fn named_cases() {
        assert_eq!(next_state(Cell::Alive, 1), Cell::Dead); // underpopulation
        assert_eq!(next_state(Cell::Alive, 4), Cell::Dead); // overpopulation
        assert_eq!(next_state(Cell::Dead, 2), Cell::Dead);
        assert_eq!(next_state(Cell::Dead, 3), Cell::Alive);
    }
}
