//! Pieces module - static tetromino shape catalog
//!
//! Every rotation state of every kind is stored as a precomputed occupancy
//! matrix, so rotating a piece is a table lookup and never a matrix
//! transform. Kinds cycle through their states in table order:
//!
//! | Kind | States |
//! |------|--------|
//! | I, S, Z | 2 |
//! | J, L, T | 4 |
//! | O | 1 |
//!
//! Each matrix has an occupied cell in its first row, so no rotation ever
//! needs clearance above the shape's top-left corner.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Offset of a single mino relative to the shape's top-left cell, as (dx, dy)
pub type MinoOffset = (i8, i8);

/// One rotation state of a piece kind: a row-major occupancy matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: &'static [&'static [u8]],
}

impl Shape {
    const fn new(rows: &'static [&'static [u8]]) -> Self {
        Self { rows }
    }

    /// Number of matrix rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of matrix columns
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Occupied cells as (dx, dy) offsets, row by row
    pub fn minos(&self) -> ArrayVec<MinoOffset, 4> {
        let mut out = ArrayVec::new();
        for (dy, row) in self.rows.iter().enumerate() {
            for (dx, &v) in row.iter().enumerate() {
                if v != 0 {
                    out.push((dx as i8, dy as i8));
                }
            }
        }
        out
    }
}

const I_SHAPES: [Shape; 2] = [
    Shape::new(&[&[1, 1, 1, 1]]),
    Shape::new(&[&[1], &[1], &[1], &[1]]),
];

const J_SHAPES: [Shape; 4] = [
    Shape::new(&[&[1, 0, 0], &[1, 1, 1]]),
    Shape::new(&[&[1, 1], &[1, 0], &[1, 0]]),
    Shape::new(&[&[1, 1, 1], &[0, 0, 1]]),
    Shape::new(&[&[0, 1], &[0, 1], &[1, 1]]),
];

const L_SHAPES: [Shape; 4] = [
    Shape::new(&[&[0, 0, 1], &[1, 1, 1]]),
    Shape::new(&[&[1, 0], &[1, 0], &[1, 1]]),
    Shape::new(&[&[1, 1, 1], &[1, 0, 0]]),
    Shape::new(&[&[1, 1], &[0, 1], &[0, 1]]),
];

const O_SHAPES: [Shape; 1] = [Shape::new(&[&[1, 1], &[1, 1]])];

const S_SHAPES: [Shape; 2] = [
    Shape::new(&[&[0, 1, 1], &[1, 1, 0]]),
    Shape::new(&[&[1, 0], &[1, 1], &[0, 1]]),
];

const T_SHAPES: [Shape; 4] = [
    Shape::new(&[&[0, 1, 0], &[1, 1, 1]]),
    Shape::new(&[&[1, 0], &[1, 1], &[1, 0]]),
    Shape::new(&[&[1, 1, 1], &[0, 1, 0]]),
    Shape::new(&[&[0, 1], &[1, 1], &[0, 1]]),
];

const Z_SHAPES: [Shape; 2] = [
    Shape::new(&[&[1, 1, 0], &[0, 1, 1]]),
    Shape::new(&[&[0, 1], &[1, 1], &[1, 0]]),
];

/// All rotation states of a kind, in cycle order
pub fn rotations(kind: PieceKind) -> &'static [Shape] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::Z => &Z_SHAPES,
    }
}

/// Number of stored rotation states for a kind
pub fn rotation_count(kind: PieceKind) -> usize {
    rotations(kind).len()
}

/// Rotation index that follows `rotation` in the kind's cycle
pub fn next_rotation(kind: PieceKind, rotation: u8) -> u8 {
    ((rotation as usize + 1) % rotation_count(kind)) as u8
}

/// Get the shape for a kind and rotation index
///
/// The index wraps modulo the kind's state count, so any value is accepted.
pub fn get_shape(kind: PieceKind, rotation: u8) -> Shape {
    let states = rotations(kind);
    states[rotation as usize % states.len()]
}
