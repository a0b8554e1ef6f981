//! Static column/row lookup tables over the 64-square mailbox.
//!
//! Move generation walks squares by adding fixed index offsets, so a piece on
//! the a- or h-file would silently wrap onto the opposite edge. These tables
//! let each generator reject the offsets that would wrap.

use crate::game_state::chess_types::{Side, Square, TOTAL_SQUARES};

pub const FIRST_COLUMN: [bool; TOTAL_SQUARES] = column_mask(0);
pub const SECOND_COLUMN: [bool; TOTAL_SQUARES] = column_mask(1);
pub const SEVENTH_COLUMN: [bool; TOTAL_SQUARES] = column_mask(6);
pub const LAST_COLUMN: [bool; TOTAL_SQUARES] = column_mask(7);

/// Row masks, top (Black's back rank) to bottom (White's back rank).
pub const ROWS: [[bool; TOTAL_SQUARES]; 8] = [
    row_mask(0),
    row_mask(1),
    row_mask(2),
    row_mask(3),
    row_mask(4),
    row_mask(5),
    row_mask(6),
    row_mask(7),
];

pub const FIRST_ROW: [bool; TOTAL_SQUARES] = ROWS[0];
pub const SECOND_ROW: [bool; TOTAL_SQUARES] = ROWS[1];
pub const SEVENTH_ROW: [bool; TOTAL_SQUARES] = ROWS[6];
pub const LAST_ROW: [bool; TOTAL_SQUARES] = ROWS[7];

const fn column_mask(column: usize) -> [bool; TOTAL_SQUARES] {
    let mut mask = [false; TOTAL_SQUARES];
    let mut sq = column;
    while sq < TOTAL_SQUARES {
        mask[sq] = true;
        sq += 8;
    }
    mask
}

const fn row_mask(row: usize) -> [bool; TOTAL_SQUARES] {
    let mut mask = [false; TOTAL_SQUARES];
    let mut sq = row * 8;
    while sq < (row + 1) * 8 {
        mask[sq] = true;
        sq += 1;
    }
    mask
}

#[inline]
pub const fn is_valid_square(coordinate: i32) -> bool {
    coordinate >= 0 && coordinate < TOTAL_SQUARES as i32
}

/// Adds `offset` to `square`, returning `None` when the result leaves the board.
#[inline]
pub fn offset_square(square: Square, offset: i8) -> Option<Square> {
    let target = i32::from(square) + i32::from(offset);
    if is_valid_square(target) {
        Square::try_from(target).ok()
    } else {
        None
    }
}

/// True when stepping `offset` from `square` would wrap across the a- or h-file.
///
/// Covers the one-column offsets shared by kings, queens, rooks, bishops and
/// pawn captures (`±1`, `±7`, `±9`).
#[inline]
pub fn crosses_side_edge(square: Square, offset: i8) -> bool {
    let sq = square as usize;
    (FIRST_COLUMN[sq] && matches!(offset, -9 | -1 | 7))
        || (LAST_COLUMN[sq] && matches!(offset, -7 | 1 | 9))
}

/// True when a knight jump of `offset` from `square` would wrap across an edge.
#[inline]
pub fn knight_crosses_edge(square: Square, offset: i8) -> bool {
    let sq = square as usize;
    (FIRST_COLUMN[sq] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_COLUMN[sq] && matches!(offset, -10 | 6))
        || (SEVENTH_COLUMN[sq] && matches!(offset, -6 | 10))
        || (LAST_COLUMN[sq] && matches!(offset, -15 | -6 | 10 | 17))
}

/// Far row on which a pawn of `side` promotes.
#[inline]
pub fn is_promotion_square(side: Side, square: Square) -> bool {
    match side {
        Side::White => FIRST_ROW[square as usize],
        Side::Black => LAST_ROW[square as usize],
    }
}

/// Row a pawn of `side` starts on and may double-step from.
#[inline]
pub fn is_pawn_start_square(side: Side, square: Square) -> bool {
    match side {
        Side::White => SEVENTH_ROW[square as usize],
        Side::Black => SECOND_ROW[square as usize],
    }
}
