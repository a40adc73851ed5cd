//! Interactive tracer
//!
//! Owns the guide geometry, the session, and the measured canvas size.
//! Pointer events arrive in canvas pixels, get mapped into the viewbox, and
//! drive the session. Session outcomes are turned into observer callbacks and
//! haptic pulses here.

use lexi_geom::{Point, Viewport};

use crate::config::TracerConfig;
use crate::guides::{GuideInput, GuideSet};
use crate::session::{ArmOutcome, MoveOutcome, ReleaseOutcome, TraceSession};

/// Pointer event in canvas-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    /// Gesture terminated by the platform
    Cancel,
}

/// What a pointer event did
#[derive(Debug, Clone, PartialEq)]
pub enum TraceOutcome {
    Down(ArmOutcome),
    Move(MoveOutcome),
    Up(ReleaseOutcome),
    Cancelled,
}

/// Host notifications
pub trait TraceObserver {
    /// Committed stroke list changed (commit, clear, or undo)
    fn on_path_change(&mut self, _paths: &[String]) {}

    /// A stroke was just committed
    fn on_stroke_complete(&mut self, _path: &str) {}
}

impl TraceObserver for () {}

/// Observer that records every notification
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathLog {
    pub changes: Vec<Vec<String>>,
    pub completed: Vec<String>,
}

impl PathLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent committed list, empty if nothing was reported yet
    pub fn latest(&self) -> &[String] {
        self.changes.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl TraceObserver for PathLog {
    fn on_path_change(&mut self, paths: &[String]) {
        self.changes.push(paths.to_vec());
    }

    fn on_stroke_complete(&mut self, path: &str) {
        self.completed.push(path.to_string());
    }
}

/// Haptic pulse kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticKind {
    /// Touch-down armed a stroke
    Arm,
    /// Stroke committed
    Complete,
}

/// Haptic error
#[derive(Debug, thiserror::Error)]
pub enum HapticError {
    #[error("Haptics unavailable")]
    Unavailable,
}

/// Tactile feedback sink. Failures are logged and dropped by the tracer.
pub trait Haptics {
    fn pulse(&mut self, kind: HapticKind) -> Result<(), HapticError>;
}

/// No-op haptics
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&mut self, _kind: HapticKind) -> Result<(), HapticError> {
        Ok(())
    }
}

/// Imperative handle exposed to the host screen
pub trait TracerHandle {
    /// Discard all progress and committed strokes
    fn clear(&mut self);

    /// Remove the most recently committed stroke
    fn undo(&mut self);

    /// Snapshot of the committed path strings
    fn get_paths(&self) -> Vec<String>;
}

/// Letter tracer
pub struct Tracer<O = (), H = NoHaptics> {
    config: TracerConfig,
    input: GuideInput,
    glyph_scale: f32,
    guides: GuideSet,
    session: TraceSession,
    viewport: Viewport,
    observer: O,
    haptics: H,
}

impl Tracer {
    /// Tracer with no observer and no haptics, sized to the viewbox
    pub fn new(input: GuideInput, config: TracerConfig) -> Self {
        let guides = GuideSet::build(&input, 1.0, &config);
        let viewport = Viewport::with_viewbox(config.viewbox_size, config.viewbox_size, config.viewbox_size);
        Self {
            config,
            input,
            glyph_scale: 1.0,
            guides,
            session: TraceSession::new(),
            viewport,
            observer: (),
            haptics: NoHaptics,
        }
    }
}

impl<O: TraceObserver, H: Haptics> Tracer<O, H> {
    /// Replace the observer
    pub fn with_observer<O2: TraceObserver>(self, observer: O2) -> Tracer<O2, H> {
        Tracer {
            config: self.config,
            input: self.input,
            glyph_scale: self.glyph_scale,
            guides: self.guides,
            session: self.session,
            viewport: self.viewport,
            observer,
            haptics: self.haptics,
        }
    }

    /// Replace the haptics sink
    pub fn with_haptics<H2: Haptics>(self, haptics: H2) -> Tracer<O, H2> {
        Tracer {
            config: self.config,
            input: self.input,
            glyph_scale: self.glyph_scale,
            guides: self.guides,
            session: self.session,
            viewport: self.viewport,
            observer: self.observer,
            haptics,
        }
    }

    pub fn with_glyph_scale(mut self, scale: f32) -> Self {
        self.set_glyph_scale(scale);
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.resize(width, height);
        self
    }

    /// Switch to a new letter. Geometry and session are replaced together.
    pub fn set_guides(&mut self, input: GuideInput) {
        self.input = input;
        self.rebuild();
    }

    /// Change the glyph scale. Resets progress since the geometry moves.
    pub fn set_glyph_scale(&mut self, scale: f32) {
        self.glyph_scale = scale;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.guides = GuideSet::build(&self.input, self.glyph_scale, &self.config);
        self.session.clear();
    }

    /// Canvas layout changed
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::with_viewbox(width, height, self.config.viewbox_size);
    }

    /// Feed one pointer event
    pub fn handle(&mut self, event: PointerEvent) -> TraceOutcome {
        match event {
            PointerEvent::Down(p) => TraceOutcome::Down(self.pointer_down(p)),
            PointerEvent::Move(p) => TraceOutcome::Move(self.pointer_move(p)),
            PointerEvent::Up => TraceOutcome::Up(self.pointer_up()),
            PointerEvent::Cancel => {
                self.pointer_cancel();
                TraceOutcome::Cancelled
            }
        }
    }

    pub fn pointer_down(&mut self, p: Point) -> ArmOutcome {
        let p = self.viewport.to_viewbox(p);
        let outcome = self.session.touch_down(p, &self.guides, &self.config);
        if outcome == ArmOutcome::Armed {
            self.pulse(HapticKind::Arm);
        }
        outcome
    }

    pub fn pointer_move(&mut self, p: Point) -> MoveOutcome {
        let p = self.viewport.to_viewbox(p);
        self.session.touch_move(p, &self.guides, &self.config)
    }

    pub fn pointer_up(&mut self) -> ReleaseOutcome {
        let outcome = self.session.release(&self.guides, &self.config);
        if let ReleaseOutcome::Committed { path, .. } = &outcome {
            self.pulse(HapticKind::Complete);
            self.observer.on_stroke_complete(path);
            self.observer.on_path_change(self.session.committed());
        }
        outcome
    }

    pub fn pointer_cancel(&mut self) {
        self.session.cancel();
    }

    fn pulse(&mut self, kind: HapticKind) {
        if let Err(e) = self.haptics.pulse(kind) {
            tracing::trace!("Haptic {:?} dropped: {}", kind, e);
        }
    }

    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    pub fn guides(&self) -> &GuideSet {
        &self.guides
    }

    pub fn session(&self) -> &TraceSession {
        &self.session
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn glyph_scale(&self) -> f32 {
        self.glyph_scale
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    /// All strokes of the letter are committed
    pub fn is_complete(&self) -> bool {
        self.session.is_complete(&self.guides)
    }
}

impl<O: TraceObserver, H: Haptics> TracerHandle for Tracer<O, H> {
    fn clear(&mut self) {
        self.session.clear();
        tracing::debug!("Cleared trace");
        self.observer.on_path_change(&[]);
    }

    fn undo(&mut self) {
        let popped = self.session.undo();
        tracing::debug!("Undo (removed stroke: {})", popped.is_some());
        self.observer.on_path_change(self.session.committed());
    }

    fn get_paths(&self) -> Vec<String> {
        self.session.committed().to_vec()
    }
}
