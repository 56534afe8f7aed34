//! Piecewise animation curves.
//!
//! A curve is an ordered list of frame ranges, each with its own function of
//! the frame, plus a fallback for frames no range covers. Discontinuities
//! between segments are part of the data, not an accident of branching.

use std::ops::RangeInclusive;

use super::clock::FrameTime;

#[derive(Debug, Clone)]
struct Segment<T> {
    frames: RangeInclusive<u32>,
    eval: fn(u32) -> T,
}

/// Ordered `(frame range, fn(frame) -> T)` segments with a fallback value.
#[derive(Debug, Clone)]
pub struct AnimationCurve<T> {
    segments: Vec<Segment<T>>,
    fallback: T,
}

impl<T: Copy> AnimationCurve<T> {
    /// A curve that yields `fallback` everywhere until segments are added.
    pub fn new(fallback: T) -> Self {
        Self {
            segments: Vec::new(),
            fallback,
        }
    }

    /// Appends a segment. Earlier segments win where ranges overlap.
    pub fn segment(mut self, frames: RangeInclusive<u32>, eval: fn(u32) -> T) -> Self {
        self.segments.push(Segment { frames, eval });
        self
    }

    pub fn sample(&self, time: FrameTime) -> T {
        let frame = time.frame();
        self.segments
            .iter()
            .find(|segment| segment.frames.contains(&frame))
            .map_or(self.fallback, |segment| (segment.eval)(frame))
    }

    /// Index of the segment covering `time`, or `None` for the fallback.
    pub fn segment_index(&self, time: FrameTime) -> Option<usize> {
        self.segments
            .iter()
            .position(|segment| segment.frames.contains(&time.frame()))
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn fallback(&self) -> T {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stepped() -> AnimationCurve<i32> {
        AnimationCurve::new(-1)
            .segment(0..=9, |f| f as i32)
            .segment(10..=19, |_| 100)
    }

    #[test]
    fn samples_first_matching_segment() {
        let curve = stepped();
        assert_eq!(curve.sample(FrameTime::new(0)), 0);
        assert_eq!(curve.sample(FrameTime::new(9)), 9);
        assert_eq!(curve.sample(FrameTime::new(10)), 100);
        assert_eq!(curve.segment_index(FrameTime::new(19)), Some(1));
    }

    #[test]
    fn uncovered_frames_use_fallback() {
        let curve = stepped();
        assert_eq!(curve.sample(FrameTime::new(20)), -1);
        assert_eq!(curve.segment_index(FrameTime::new(20)), None);
        assert_eq!(AnimationCurve::new(7.5f32).sample(FrameTime::new(3)), 7.5);
    }

    #[test]
    fn earlier_segment_wins_on_overlap() {
        let curve = AnimationCurve::new(0).segment(0..=5, |_| 1).segment(3..=8, |_| 2);
        assert_eq!(curve.sample(FrameTime::new(4)), 1);
        assert_eq!(curve.sample(FrameTime::new(6)), 2);
        assert_eq!(curve.segment_count(), 2);
    }
}
