//! The persisted offset document.

use std::collections::BTreeMap;

use glam::DMat4;
use serde::{Deserialize, Serialize};

use crate::math;

/// A world matrix in the document's flat row-major layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredMatrix([f64; 16]);

impl StoredMatrix {
    #[inline]
    #[must_use]
    pub fn to_matrix(self) -> DMat4 {
        math::from_row_major(&self.0)
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64; 16] {
        &self.0
    }
}

impl From<DMat4> for StoredMatrix {
    fn from(matrix: DMat4) -> Self {
        Self(math::to_row_major(matrix))
    }
}

/// One recorded offset relationship.
///
/// With no parent, every entry in `children_matrices` is an absolute world
/// matrix captured directly. With a parent, each entry is the child's offset
/// relative to the parent at capture time, `offset = child_world *
/// parent_world⁻¹`, to be re-anchored against the parent's live matrix at
/// paste time.
///
/// Exactly one record exists on disk at a time; see
/// [`OffsetStore`](crate::offset::OffsetStore).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OffsetRecord {
    pub parent: Option<String>,
    pub children_matrices: BTreeMap<String, StoredMatrix>,
}

impl OffsetRecord {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children_matrices.is_empty()
    }

    /// Number of recorded children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children_matrices.len()
    }
}
