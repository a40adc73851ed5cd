//! Lexi Trace
//!
//! Interactive letter tracing for the Lexi reading trainer.
//!
//! Features:
//! - Guide normalization (path strings or point lists)
//! - Built-in stroke-order guides
//! - Explicit trace session state machine
//! - Tracer component with host callbacks and haptics
//! - Deterministic quiz round helpers

pub mod config;
pub mod guides;
pub mod letters;
pub mod session;
pub mod tracer;
pub mod rounds;

pub use config::{TracerConfig, ConfigError};
pub use guides::{GuideInput, Guide, GuideSet};
pub use session::{TraceSession, Phase, ArmOutcome, MoveOutcome, ReleaseOutcome, meets_completion};
pub use tracer::{
    Tracer, TracerHandle, TraceObserver, PathLog,
    PointerEvent, TraceOutcome,
    Haptics, HapticKind, HapticError, NoHaptics,
};
pub use rounds::{RoundItem, deterministic_pick, place_correct, build_round, stable_hash};

pub use lexi_geom::{Point, Viewport};
