//! The injected host collaborator.
//!
//! Everything the tool needs from the surrounding animation application goes
//! through [`SceneHost`]: selection, world transforms, keyframing, the global
//! current frame and the timeline highlight. Keeping this behind a trait keeps
//! the offset logic testable without a live host.

use std::ops::{Deref, DerefMut};

use glam::DMat4;

use crate::errors::Result;

/// Inclusive-start, exclusive-end range of integer frame numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRange {
    pub start: i32,
    pub end: i32,
}

impl FrameRange {
    #[must_use]
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// The single-frame range `[frame, frame + 1)`, used when the timeline has
    /// no highlighted selection.
    #[must_use]
    pub fn single(frame: i32) -> Self {
        Self {
            start: frame,
            end: frame + 1,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        (self.end - self.start).max(0) as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Frames in ascending order.
    pub fn frames(&self) -> std::ops::Range<i32> {
        self.start..self.end
    }
}

impl IntoIterator for FrameRange {
    type Item = i32;
    type IntoIter = std::ops::Range<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames()
    }
}

/// Scene-graph and timeline services of the embedding application.
///
/// All calls are blocking and complete before returning; the tool itself has
/// no concurrency. World matrices are exchanged in the host's world-space
/// convention, double precision.
pub trait SceneHost {
    /// Current selection, preserving the host's selection order.
    fn selection(&self) -> Vec<String>;

    /// Whether `name` currently exists in the scene.
    fn object_exists(&self, name: &str) -> bool;

    /// World-space transform of `name`.
    fn world_matrix(&self, name: &str) -> Result<DMat4>;

    /// Overwrite the world-space transform of `name`.
    fn set_world_matrix(&mut self, name: &str, matrix: DMat4) -> Result<()>;

    /// Insert a keyframe on `name` at the current frame, keying whichever
    /// channels the host's default keying behavior covers.
    fn set_keyframe(&mut self, name: &str) -> Result<()>;

    /// The global current frame.
    fn current_frame(&self) -> i32;

    /// Move the global current frame.
    fn set_current_frame(&mut self, frame: i32) -> Result<()>;

    /// The user's highlighted timeline range, or `None` when nothing is
    /// highlighted.
    fn highlighted_frame_range(&self) -> Option<FrameRange>;

    /// Suspend viewport refresh until [`SceneHost::resume_refresh`].
    fn suspend_refresh(&mut self);
    fn resume_refresh(&mut self);

    /// Open an undo grouping so a whole multi-frame paste reverts as one
    /// undo action; closed by [`SceneHost::close_undo_chunk`].
    fn open_undo_chunk(&mut self);
    fn close_undo_chunk(&mut self);
}

/// Scoped acquisition of the host's "refresh suspended" and "undo chunk open"
/// resources.
///
/// Entering the scope suspends viewport refresh and opens an undo chunk; both
/// are released in `Drop`, so every exit path out of a paste (normal
/// completion, missing-parent abort, propagated host failure) restores the
/// host.
pub struct PasteScope<'a, H: SceneHost + ?Sized> {
    host: &'a mut H,
}

impl<'a, H: SceneHost + ?Sized> PasteScope<'a, H> {
    pub fn enter(host: &'a mut H) -> Self {
        host.suspend_refresh();
        host.open_undo_chunk();
        Self { host }
    }
}

impl<H: SceneHost + ?Sized> Deref for PasteScope<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        self.host
    }
}

impl<H: SceneHost + ?Sized> DerefMut for PasteScope<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        self.host
    }
}

impl<H: SceneHost + ?Sized> Drop for PasteScope<'_, H> {
    fn drop(&mut self) {
        self.host.resume_refresh();
        self.host.close_undo_chunk();
    }
}
