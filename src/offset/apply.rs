//! Offset paste: rebuild world matrices across a frame range, keyframing.

use crate::errors::{GhostError, Result};
use crate::host::{FrameRange, PasteScope, SceneHost};
use crate::math;
use crate::offset::record::OffsetRecord;

/// Paste `record` on every frame of `frames`, ascending.
///
/// Viewport refresh stays suspended and one undo chunk stays open for the
/// whole range, so the paste reverts as a single undo action; both are
/// released on every exit path, including a missing-parent abort or a
/// propagated host failure. The current frame advances as the loop runs and
/// the host is left on the last frame reached.
pub fn apply<H: SceneHost + ?Sized>(
    host: &mut H,
    record: &OffsetRecord,
    frames: FrameRange,
) -> Result<()> {
    let mut scope = PasteScope::enter(host);
    for frame in frames {
        scope.set_current_frame(frame)?;
        apply_single_frame(&mut *scope, record)?;
    }
    Ok(())
}

/// Paste `record` at the current frame.
///
/// A child missing from the scene is skipped without a keyframe. A missing
/// parent aborts the whole paste instead, remaining children and frames
/// included.
pub fn apply_single_frame<H: SceneHost + ?Sized>(
    host: &mut H,
    record: &OffsetRecord,
) -> Result<()> {
    for (child, stored) in &record.children_matrices {
        if !host.object_exists(child) {
            log::debug!("skipping {child:?}: not in scene");
            continue;
        }

        // With no parent the stored matrix is already the world target.
        let mut target = stored.to_matrix();

        if let Some(parent) = record.parent.as_deref() {
            if !host.object_exists(parent) {
                return Err(GhostError::MissingParent(parent.to_owned()));
            }
            // The parent's live matrix, not the capture-time one: pasting
            // across an animated parent lands each frame wherever the parent
            // is on that frame.
            target = math::compose_with_parent(target, host.world_matrix(parent)?);
        }

        host.set_world_matrix(child, target)?;
        host.set_keyframe(child)?;
    }

    Ok(())
}
