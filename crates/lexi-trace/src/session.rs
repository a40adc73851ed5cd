//! Trace session state machine
//!
//! `TraceSession` is plain data plus transition methods. It never calls back
//! into the host; each transition returns an outcome and the owning
//! [`Tracer`](crate::Tracer) turns outcomes into callbacks and haptics.
//!
//! ```text
//! Idle --down near start--> Armed --move on path--> Tracing
//!   ^                                                  |
//!   +------- up (committed or discarded) / cancel -----+
//! ```

use lexi_geom::Point;

use crate::config::TracerConfig;
use crate::guides::GuideSet;

/// Gesture phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Touch-down landed near the stroke start
    Armed,
    /// At least one on-path move since arming
    Tracing,
}

/// Result of a touch-down
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArmOutcome {
    Armed,
    /// Too far from the active stroke's start
    OutOfReach { distance: f32 },
    /// No active stroke, or the active stroke has no geometry
    NothingToTrace,
}

/// Result of a touch-move
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// Progress moved forward to this arc length
    Advanced(f32),
    /// On path, within backtrack tolerance, no forward motion
    Held,
    /// On path but too far behind the recorded progress
    BacktrackRejected { arc_length: f32 },
    /// Farther than the track tolerance from the stroke
    OffPath,
    NotArmed,
}

/// Result of a touch release
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// Stroke `index` is done; `path` is its idealized path string
    Committed { index: usize, path: String },
    /// Released short of the completion threshold; progress discarded
    Incomplete { progress: f32 },
    NotArmed,
}

/// Completion threshold check. Zero-length strokes never complete.
pub fn meets_completion(progress: f32, total_length: f32, completion_fraction: f32) -> bool {
    total_length > 0.0 && progress >= total_length * completion_fraction
}

/// Per-letter tracing state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceSession {
    active: usize,
    progress: f32,
    committed: Vec<String>,
    phase: Phase,
}

impl TraceSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the stroke being traced
    pub fn active_stroke(&self) -> usize {
        self.active
    }

    /// Arc length covered along the active stroke
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Idealized path strings of finished strokes, in order
    pub fn committed(&self) -> &[String] {
        &self.committed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_armed(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Every stroke of a non-empty guide set has been committed
    pub fn is_complete(&self, guides: &GuideSet) -> bool {
        !guides.is_empty() && self.active >= guides.len()
    }

    /// Touch-down at `p` in viewbox space
    pub fn touch_down(&mut self, p: Point, guides: &GuideSet, config: &TracerConfig) -> ArmOutcome {
        let Some(guide) = guides.get(self.active).filter(|g| g.is_traceable()) else {
            self.phase = Phase::Idle;
            return ArmOutcome::NothingToTrace;
        };
        let Some(start) = guide.sampled().start() else {
            self.phase = Phase::Idle;
            return ArmOutcome::NothingToTrace;
        };

        let distance = p.distance(start);
        if distance <= config.start_capture_radius() {
            self.phase = Phase::Armed;
            self.progress = 0.0;
            tracing::debug!("Armed stroke {} ({:.1} from start)", self.active, distance);
            ArmOutcome::Armed
        } else {
            self.phase = Phase::Idle;
            ArmOutcome::OutOfReach { distance }
        }
    }

    /// Touch-move to `p` in viewbox space
    pub fn touch_move(&mut self, p: Point, guides: &GuideSet, config: &TracerConfig) -> MoveOutcome {
        if self.phase == Phase::Idle {
            return MoveOutcome::NotArmed;
        }
        let Some(guide) = guides.get(self.active) else {
            return MoveOutcome::NotArmed;
        };

        let Some(proj) = guide.sampled().nearest(p) else {
            return MoveOutcome::OffPath;
        };
        if proj.distance > config.track_tolerance() {
            tracing::trace!("Ignoring move {:.1} off stroke {}", proj.distance, self.active);
            return MoveOutcome::OffPath;
        }

        if proj.arc_length < self.progress - config.backtrack_tolerance() {
            tracing::trace!("Ignoring jump back to {:.1} (progress {:.1})", proj.arc_length, self.progress);
            return MoveOutcome::BacktrackRejected { arc_length: proj.arc_length };
        }

        self.phase = Phase::Tracing;
        if proj.arc_length > self.progress {
            self.progress = proj.arc_length;
            MoveOutcome::Advanced(self.progress)
        } else {
            MoveOutcome::Held
        }
    }

    /// Touch release
    pub fn release(&mut self, guides: &GuideSet, config: &TracerConfig) -> ReleaseOutcome {
        if self.phase == Phase::Idle {
            return ReleaseOutcome::NotArmed;
        }
        self.phase = Phase::Idle;

        let Some(guide) = guides.get(self.active) else {
            self.progress = 0.0;
            return ReleaseOutcome::NotArmed;
        };

        let total = guide.sampled().total_length();
        if meets_completion(self.progress, total, config.completion_fraction) {
            let index = self.active;
            let path = guide.path().to_string();
            self.committed.push(path.clone());
            self.active += 1;
            self.progress = 0.0;
            tracing::debug!("Committed stroke {} of {}", index + 1, guides.len());
            ReleaseOutcome::Committed { index, path }
        } else {
            let progress = self.progress;
            self.progress = 0.0;
            tracing::debug!("Released stroke {} at {:.1}/{:.1}", self.active, progress, total);
            ReleaseOutcome::Incomplete { progress }
        }
    }

    /// Platform cancelled the gesture. Progress stays, but a fresh touch-down
    /// near the start is needed to continue.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Back to the first stroke with nothing committed
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drop the last committed stroke and make it the active one again
    pub fn undo(&mut self) -> Option<String> {
        let popped = self.committed.pop();
        self.active = self.committed.len();
        self.progress = 0.0;
        self.phase = Phase::Idle;
        popped
    }
}
