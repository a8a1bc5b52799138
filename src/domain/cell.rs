/// State of a single grid position. Every cell is either dead or alive;
/// there are no intermediate states.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    /// Whether this cell counts toward a neighbor tally.
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// The opposite state, used when the player clicks a cell.
    pub const fn toggled(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Conway's birth/survival rule (B3/S23): a live cell survives with 2
    /// or 3 live neighbors, a dead cell is born with exactly 3, and every
    /// other combination yields a dead cell.
    pub const fn next_state(self, live_neighbors: u8) -> Self {
        match (self, live_neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
