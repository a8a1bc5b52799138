//! Canonical starting patterns as fixed lookup tables.
//!
//! Each table lists the alive cells of one well-known configuration as
//! (row, column) offsets. Patterns only work with exact cell placement,
//! so the tables are literal data.

use super::{Cell, Grid};

/// One library entry: where the table is anchored relative to the caller's
/// reference point, plus the alive-cell offsets from that anchor.
struct Pattern {
    /// (row, column) shift applied to the reference point before stamping.
    /// Lets every caller pass grid center while each pattern decides how to
    /// sit around it: the pulsar centers its 15x15 bounding box, and the
    /// gun backs up far enough that its glider exhaust stays on-grid.
    anchor: (i32, i32),
    /// (row, column) offsets of alive cells, relative to the shifted anchor.
    cells: &'static [(i32, i32)],
}

/// Smallest spaceship; crawls one cell down-right every 4 generations.
static GLIDER: Pattern = Pattern {
    anchor: (0, 0),
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Period-3 oscillator, 48 cells in four-fold symmetry.
static PULSAR: Pattern = Pattern {
    anchor: (-7, -7),
    cells: &[
        (2, 4), (2, 5), (2, 6), (2, 10), (2, 11), (2, 12),
        (7, 4), (7, 5), (7, 6), (7, 10), (7, 11), (7, 12),
        (9, 4), (9, 5), (9, 6), (9, 10), (9, 11), (9, 12),
        (14, 4), (14, 5), (14, 6), (14, 10), (14, 11), (14, 12),

        (4, 2), (5, 2), (6, 2), (10, 2), (11, 2), (12, 2),
        (4, 7), (5, 7), (6, 7), (10, 7), (11, 7), (12, 7),
        (4, 9), (5, 9), (6, 9), (10, 9), (11, 9), (12, 9),
        (4, 14), (5, 14), (6, 14), (10, 14), (11, 14), (12, 14),
    ],
};

/// Gosper glider gun, 36 cells; emits a glider every 30 generations.
static GOSPER_GUN: Pattern = Pattern {
    anchor: (-10, -20),
    cells: &[
        // left block
        (5, 1), (5, 2), (6, 1), (6, 2),
        // left emitter
        (5, 11), (6, 11), (7, 11),
        (4, 12), (8, 12),
        (3, 13), (9, 13),
        (3, 14), (9, 14),
        (6, 15),
        (4, 16), (8, 16),
        (5, 17), (6, 17), (7, 17),
        (6, 18),
        // right emitter
        (3, 21), (4, 21), (5, 21),
        (3, 22), (4, 22), (5, 22),
        (2, 23), (6, 23),
        (1, 25), (2, 25), (6, 25), (7, 25),
        // right block
        (3, 35), (4, 35), (3, 36), (4, 36),
    ],
};

fn lookup(name: &str) -> Option<&'static Pattern> {
    match name {
        "glider" => Some(&GLIDER),
        "pulsar" => Some(&PULSAR),
        "gosper" => Some(&GOSPER_GUN),
        _ => None,
    }
}

/// Stamp the named pattern onto the grid around the reference cell
/// (`ref_x`, `ref_y`), in practice the grid center.
///
/// Unrecognized names stamp nothing; the pattern menu is closed, so a stray
/// value degrades to a no-op instead of crashing a running simulation.
/// Offsets that land outside the grid are silently dropped, since the same
/// tables serve every selectable grid size.
pub fn stamp_pattern(grid: &mut Grid, name: &str, ref_x: i32, ref_y: i32) {
    if let Some(pattern) = lookup(name) {
        let (anchor_row, anchor_col) = pattern.anchor;
        for &(dy, dx) in pattern.cells {
            grid.set(ref_x + anchor_col + dx, ref_y + anchor_row + dy, Cell::Alive);
        }
    }
}
