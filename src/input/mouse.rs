use glam::Vec2;

/// Converts absolute cursor positions into look offsets.
///
/// Window systems report cursor *positions*; mouse-look wants *deltas*.
/// The tracker keeps the previous position and hands back the difference,
/// with two wrinkles that matter for feel:
///
/// - **First-sample suppression.** The first position observed after
///   construction or [`reset`](Self::reset) only seeds the reference
///   point and yields no offset. Without this, the large jump from the
///   default reference to wherever the cursor actually enters the window
///   would whip the camera on the first frame of mouse-look.
/// - **Y inversion.** Screen coordinates grow downward; look offsets
///   treat positive Y as "up". The flip happens here so everything
///   downstream can use the intuitive convention.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CursorTracker {
    last: Option<Vec2>,
}

impl CursorTracker {
    /// A tracker with suppression armed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an absolute cursor position; get the look offset since the
    /// previous one, or `None` for the seeding sample.
    pub fn offset(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let current = Vec2::new(x, y);
        let offset = self
            .last
            .map(|last| Vec2::new(current.x - last.x, last.y - current.y));
        self.last = Some(current);
        offset
    }

    /// Re-arm first-sample suppression.
    ///
    /// Call whenever cursor capture is gained or regained — the next
    /// reported position bears no relation to the last one seen.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_yields_no_offset() {
        let mut tracker = CursorTracker::new();
        assert_eq!(tracker.offset(400.0, 300.0), None);
    }

    #[test]
    fn subsequent_samples_yield_deltas_with_y_flipped() {
        let mut tracker = CursorTracker::new();
        assert_eq!(tracker.offset(400.0, 300.0), None);

        // Cursor moved right and down; look offset is right and *down*
        // (negative y after the flip).
        let offset = tracker.offset(410.0, 320.0);
        assert_eq!(offset, Some(Vec2::new(10.0, -20.0)));

        // Moving up on screen looks up.
        let offset = tracker.offset(410.0, 290.0);
        assert_eq!(offset, Some(Vec2::new(0.0, 30.0)));
    }

    #[test]
    fn reset_rearms_suppression() {
        let mut tracker = CursorTracker::new();
        assert_eq!(tracker.offset(100.0, 100.0), None);
        assert!(tracker.offset(150.0, 100.0).is_some());

        tracker.reset();
        // The jump from (150, 100) to (900, 700) is swallowed.
        assert_eq!(tracker.offset(900.0, 700.0), None);
        assert_eq!(tracker.offset(905.0, 700.0), Some(Vec2::new(5.0, 0.0)));
    }
}
