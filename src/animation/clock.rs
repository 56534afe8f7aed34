//! The animation clock and the per-frame time snapshot it hands out.

/// Frame at or beyond which the next tick loops back to 0.
pub const LOOP_BOUND: u32 = 400;

/// Immutable snapshot of the animation clock, passed by value into
/// everything that animates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameTime(u32);

impl FrameTime {
    pub const fn new(frame: u32) -> Self {
        Self(frame)
    }

    pub const fn frame(self) -> u32 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }

    pub fn as_i32(self) -> i32 {
        self.0 as i32
    }
}

/// Outcome of one clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Advanced(FrameTime),
    /// The clock was at or past its bound and restarted at frame 0.
    Wrapped,
}

/// Discrete frame counter advanced once per host timer tick.
///
/// Starting from 0 the observed frames are `0, 1, ..., LOOP_BOUND, 0, 1, ...`:
/// a tick taken at or beyond the bound resets to 0 instead of incrementing,
/// so every pass through the loop resets exactly once.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    frame: u32,
    loops: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the clock at an arbitrary frame, which may lie past the bound.
    pub fn starting_at(frame: u32) -> Self {
        Self { frame, loops: 0 }
    }

    pub fn now(&self) -> FrameTime {
        FrameTime(self.frame)
    }

    /// Number of completed loops.
    pub fn loops(&self) -> u64 {
        self.loops
    }

    pub fn tick(&mut self) -> Tick {
        if self.frame >= LOOP_BOUND {
            self.frame = 0;
            self.loops += 1;
            log::debug!("animation loop {} complete, frame reset to 0", self.loops);
            Tick::Wrapped
        } else {
            self.frame += 1;
            Tick::Advanced(FrameTime(self.frame))
        }
    }
}
