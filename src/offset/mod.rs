//! Offset capture, persistence and paste.
//!
//! - [`capture`]: selection → [`OffsetRecord`]
//! - [`OffsetStore`]: the single on-disk document
//! - [`apply`]: record → scene, across a frame range
//!
//! [`copy_offset`] and [`paste_offset`] are the two artist-facing commands
//! wiring those stages to the host's selection and timeline.

pub mod apply;
pub mod capture;
pub mod record;
pub mod store;

pub use apply::{apply, apply_single_frame};
pub use capture::capture;
pub use record::{OffsetRecord, StoredMatrix};
pub use store::{OFFSET_FILE_NAME, OffsetStore};

use crate::errors::{GhostError, Result};
use crate::host::{FrameRange, SceneHost};

/// Record the offsets of the current selection and write them to `store`.
///
/// An empty selection is reported as a warning and nothing is written; at
/// this surface that is not an error.
pub fn copy_offset<H: SceneHost + ?Sized>(host: &H, store: &OffsetStore) -> Result<()> {
    let selection = host.selection();
    match capture(host, &selection) {
        Ok(record) => store.write(&record),
        Err(GhostError::EmptySelection) => {
            log::warn!("selection too small, select at least 1 object");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Paste the stored offsets across the highlighted timeline range, or on the
/// current frame only when nothing is highlighted. Silently does nothing when
/// no offset document has been written yet.
pub fn paste_offset<H: SceneHost + ?Sized>(host: &mut H, store: &OffsetStore) -> Result<()> {
    let frames = host
        .highlighted_frame_range()
        .unwrap_or_else(|| FrameRange::single(host.current_frame()));
    paste_offset_over(host, store, frames)
}

/// Paste the stored offsets across an explicit frame range, independent of
/// the timeline highlight.
pub fn paste_offset_over<H: SceneHost + ?Sized>(
    host: &mut H,
    store: &OffsetStore,
    frames: FrameRange,
) -> Result<()> {
    let Some(record) = store.read()? else {
        return Ok(());
    };
    apply(host, &record, frames)
}
