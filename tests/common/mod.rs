//! Shared test double for the host application.
#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};

use ghost_constraint::{FrameRange, GhostError, Result, SceneHost};
use glam::DMat4;

/// In-memory host: a flat name → world-matrix scene, a scripted timeline and
/// counters for the refresh/undo resource pairing.
#[derive(Default)]
pub struct MockHost {
    pub selection: Vec<String>,
    pub objects: BTreeMap<String, DMat4>,
    /// Per-frame world-matrix overrides for animated objects; consulted
    /// before the base matrix in `objects`.
    pub animated: HashMap<(String, i32), DMat4>,
    pub current_frame: i32,
    pub highlighted: Option<FrameRange>,

    /// Every `set_world_matrix` call as `(name, frame, matrix)`.
    pub matrix_writes: Vec<(String, i32, DMat4)>,
    /// Every `set_keyframe` call as `(name, frame)`.
    pub keyframes: Vec<(String, i32)>,
    /// Every frame the host was advanced to, in call order.
    pub visited_frames: Vec<i32>,

    pub suspend_calls: u32,
    pub resume_calls: u32,
    pub open_chunk_calls: u32,
    pub close_chunk_calls: u32,

    /// When set, every `set_keyframe` call fails, standing in for an
    /// arbitrary host failure mid-paste.
    pub fail_keyframes: bool,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, world: DMat4) {
        self.objects.insert(name.to_string(), world);
    }

    pub fn animate(&mut self, name: &str, frame: i32, world: DMat4) {
        self.animated.insert((name.to_string(), frame), world);
    }

    pub fn select(&mut self, names: &[&str]) {
        self.selection = names.iter().map(|n| (*n).to_string()).collect();
    }

    /// Whether every suspend/open was matched by a resume/close.
    pub fn resources_released(&self) -> bool {
        self.suspend_calls == self.resume_calls && self.open_chunk_calls == self.close_chunk_calls
    }
}

impl SceneHost for MockHost {
    fn selection(&self) -> Vec<String> {
        self.selection.clone()
    }

    fn object_exists(&self, name: &str) -> bool {
        self.objects.contains_key(name)
    }

    fn world_matrix(&self, name: &str) -> Result<DMat4> {
        if let Some(world) = self.animated.get(&(name.to_string(), self.current_frame)) {
            return Ok(*world);
        }
        self.objects
            .get(name)
            .copied()
            .ok_or_else(|| GhostError::Scene(format!("unknown object {name:?}")))
    }

    fn set_world_matrix(&mut self, name: &str, matrix: DMat4) -> Result<()> {
        let Some(world) = self.objects.get_mut(name) else {
            return Err(GhostError::Scene(format!("unknown object {name:?}")));
        };
        *world = matrix;
        self.matrix_writes
            .push((name.to_string(), self.current_frame, matrix));
        Ok(())
    }

    fn set_keyframe(&mut self, name: &str) -> Result<()> {
        if self.fail_keyframes {
            return Err(GhostError::Scene("keying failed".to_string()));
        }
        if !self.objects.contains_key(name) {
            return Err(GhostError::Scene(format!("unknown object {name:?}")));
        }
        self.keyframes.push((name.to_string(), self.current_frame));
        Ok(())
    }

    fn current_frame(&self) -> i32 {
        self.current_frame
    }

    fn set_current_frame(&mut self, frame: i32) -> Result<()> {
        self.current_frame = frame;
        self.visited_frames.push(frame);
        Ok(())
    }

    fn highlighted_frame_range(&self) -> Option<FrameRange> {
        self.highlighted
    }

    fn suspend_refresh(&mut self) {
        self.suspend_calls += 1;
    }

    fn resume_refresh(&mut self) {
        self.resume_calls += 1;
    }

    fn open_undo_chunk(&mut self) {
        self.open_chunk_calls += 1;
    }

    fn close_undo_chunk(&mut self) {
        self.close_chunk_calls += 1;
    }
}

/// Route `log` output through the test harness when `RUST_LOG` is set.
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub const EPSILON: f64 = 1e-9;

pub fn mat_approx_eq(a: DMat4, b: DMat4) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| (x - y).abs() < EPSILON)
}
