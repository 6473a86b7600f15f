#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! Acts like a constraint without creating one, to keep scenes cleaner.
//!
//! Select one object to record its offset from the world origin, or select two
//! or more to record the offset of every further object relative to the first.
//! [`copy_offset`] writes the recorded offsets to a single file in the user's
//! data directory; [`paste_offset`] reads them back and re-applies them to the
//! same-named objects on the current frame or across the highlighted frame
//! range, keyframing as it goes.

pub mod errors;
pub mod host;
pub mod math;
pub mod offset;

pub use errors::{GhostError, Result};
pub use host::{FrameRange, PasteScope, SceneHost};
pub use offset::{OFFSET_FILE_NAME, OffsetRecord, OffsetStore, StoredMatrix};
pub use offset::{apply, capture, copy_offset, paste_offset, paste_offset_over};
