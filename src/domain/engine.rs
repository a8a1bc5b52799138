//! Generation advance: the full-grid re-evaluation at the heart of the
//! simulator. A plain cell-by-cell sweep; boards top out at a few hundred
//! cells per side, which finishes well inside one tick interval.

use super::Grid;

/// Compute the next generation as a brand-new grid of the same size.
///
/// Pure function: the input is only read, so a tick can never observe a
/// half-updated matrix. Off-grid neighbors count as dead (no wrap-around).
pub fn advance(grid: &Grid) -> Grid {
    let side = grid.size() as i32;
    let cells = (0..side)
        .flat_map(|y| (0..side).map(move |x| (x, y)))
        .map(|(x, y)| grid.get(x, y).next_state(live_neighbors(grid, x, y)))
        .collect();
    Grid::from_cells(grid.size(), cells)
}

/// Count alive cells among the 8 surrounding positions (Moore
/// neighborhood).
fn live_neighbors(grid: &Grid, x: i32, y: i32) -> u8 {
    (-1..=1)
        .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
        .filter(|&(dx, dy)| grid.get(x + dx, y + dy).is_alive())
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn grid_with_alive(size: usize, alive: &[(i32, i32)]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_advance_preserves_size() {
        for size in [1, 2, 6, 40] {
            let next = advance(&Grid::random(size).unwrap());
            assert_eq!(next.size(), size, "size {} drifted", size);
        }
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let mut grid = Grid::new(10).unwrap();
        for _ in 0..5 {
            grid = advance(&grid);
            assert_eq!(grid.live_count(), 0);
        }
    }

    #[test]
    fn test_lone_cell_dies() {
        let grid = grid_with_alive(5, &[(2, 2)]);
        assert_eq!(advance(&grid).live_count(), 0);
    }

    #[test]
    fn test_block_is_a_still_life() {
        let grid = grid_with_alive(6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        let next = advance(&grid);
        assert_eq!(alive_cells(&next), alive_cells(&grid));
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        // Horizontal 3-in-a-row through the center of a 6x6 grid.
        let center = 3;
        let horizontal = grid_with_alive(6, &[(center - 1, center), (center, center), (center + 1, center)]);

        let vertical = advance(&horizontal);
        assert_eq!(
            alive_cells(&vertical),
            vec![(3, 2), (3, 3), (3, 4)],
            "first advance should stand the blinker upright"
        );

        let back = advance(&vertical);
        assert_eq!(alive_cells(&back), alive_cells(&horizontal));
    }

    #[test]
    fn test_edge_cells_see_dead_outside() {
        // A corner block: every member still has 3 in-grid neighbors, so it
        // survives without any wrap-around help.
        let grid = grid_with_alive(4, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let next = advance(&grid);
        assert_eq!(alive_cells(&next), alive_cells(&grid));

        // A row hugging the top edge behaves like a blinker arm: the cells
        // above the edge are dead, not copies of the bottom row.
        let grid = grid_with_alive(5, &[(1, 0), (2, 0), (3, 0)]);
        let next = advance(&grid);
        assert_eq!(alive_cells(&next), vec![(2, 0), (2, 1)]);
    }
}
