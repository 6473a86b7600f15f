//! World-matrix helpers shared by capture and paste.
//!
//! Matrices are `glam::DMat4` in memory and flat row-major `[f64; 16]` in the
//! persisted document, matching the host's double-precision world-space
//! convention.

use glam::DMat4;

/// Offset of a child relative to a parent at the moment of capture:
/// `offset = child_world * parent_world⁻¹`.
///
/// The parent matrix must be invertible; a degenerate parent propagates
/// whatever `glam` produces for the inverse.
#[must_use]
pub fn offset_between(child_world: DMat4, parent_world: DMat4) -> DMat4 {
    child_world * parent_world.inverse()
}

/// Re-anchor a recorded offset against the parent's current world matrix:
/// `child_world' = offset * parent_world_now`.
#[must_use]
pub fn compose_with_parent(offset: DMat4, parent_world: DMat4) -> DMat4 {
    offset * parent_world
}

/// Flatten a matrix to the row-major layout of the persisted document.
/// `DMat4` is column-major in memory, so this transposes.
#[inline]
#[must_use]
pub fn to_row_major(matrix: DMat4) -> [f64; 16] {
    matrix.transpose().to_cols_array()
}

/// Rebuild a matrix from the persisted row-major layout.
#[inline]
#[must_use]
pub fn from_row_major(values: &[f64; 16]) -> DMat4 {
    DMat4::from_cols_array(values).transpose()
}
