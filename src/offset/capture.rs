//! Offset capture: read current scene poses, compute offset matrices.

use crate::errors::{GhostError, Result};
use crate::host::SceneHost;
use crate::math;
use crate::offset::record::OffsetRecord;

/// Compute an [`OffsetRecord`] for `selected`, in selection order.
///
/// A single selected object records its absolute world matrix with no parent.
/// With two or more, the first becomes the parent and every other object a
/// child with `offset = child_world * parent_world⁻¹`. Purely a read plus
/// compute: nothing in the scene is mutated.
pub fn capture<H: SceneHost + ?Sized>(host: &H, selected: &[String]) -> Result<OffsetRecord> {
    let Some((first, rest)) = selected.split_first() else {
        return Err(GhostError::EmptySelection);
    };

    let mut record = OffsetRecord::default();

    if rest.is_empty() {
        let world = host.world_matrix(first)?;
        record.children_matrices.insert(first.clone(), world.into());
        return Ok(record);
    }

    let parent_world = host.world_matrix(first)?;
    record.parent = Some(first.clone());
    for child in rest {
        let offset = math::offset_between(host.world_matrix(child)?, parent_world);
        record.children_matrices.insert(child.clone(), offset.into());
    }

    Ok(record)
}
