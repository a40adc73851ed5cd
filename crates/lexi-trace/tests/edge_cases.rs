//! Edge case tests for lexi-trace
//!
//! Gesture boundaries, undo/clear invariants, and deterministic rounds.

use lexi_trace::*;

fn line_tracer() -> Tracer<PathLog> {
    let config = TracerConfig { resample_step: 1.0, ..TracerConfig::default() };
    Tracer::new(GuideInput::from_paths(&["M 0 0 L 100 0"]), config).with_observer(PathLog::new())
}

fn two_stroke_tracer() -> Tracer<PathLog> {
    let config = TracerConfig { resample_step: 1.0, ..TracerConfig::default() };
    Tracer::new(
        GuideInput::from_paths(&["M 100 100 L 300 100", "M 100 300 L 300 300"]),
        config,
    )
    .with_observer(PathLog::new())
}

fn complete_stroke<O: TraceObserver, H: Haptics>(t: &mut Tracer<O, H>) {
    let points = t.guides().get(t.session().active_stroke()).unwrap().sampled().points().to_vec();
    t.pointer_down(points[0]);
    for p in &points {
        t.pointer_move(*p);
    }
    t.pointer_up();
}

// ============================================================================
// PROGRESS
// ============================================================================

#[test]
fn test_forward_trace_strictly_increases() {
    let mut t = line_tracer();
    assert_eq!(t.pointer_down(Point::new(0.0, 0.0)), ArmOutcome::Armed);

    let mut last = 0.0;
    for x in (5..=100).step_by(5) {
        match t.pointer_move(Point::new(x as f32, 0.0)) {
            MoveOutcome::Advanced(p) => {
                assert!(p > last, "progress {p} did not exceed {last}");
                last = p;
            }
            other => panic!("unexpected {other:?} at x={x}"),
        }
    }
    let total = t.guides().get(0).unwrap().sampled().total_length();
    assert_eq!(last, total);

    assert!(matches!(t.pointer_up(), ReleaseOutcome::Committed { index: 0, .. }));
    assert_eq!(t.get_paths(), vec!["M 0 0 L 100 0".to_string()]);
}

#[test]
fn test_off_path_move_ignored() {
    let mut t = line_tracer();
    t.pointer_down(Point::new(0.0, 0.0));
    t.pointer_move(Point::new(40.0, 0.0));
    let before = t.session().progress();

    assert_eq!(t.pointer_move(Point::new(50.0, 300.0)), MoveOutcome::OffPath);
    assert_eq!(t.session().progress(), before);
    assert!(t.session().is_armed());
}

#[test]
fn test_wobble_within_tolerance_tracks() {
    let mut t = line_tracer();
    t.pointer_down(Point::new(0.0, 0.0));
    let out = t.pointer_move(Point::new(40.0, 20.0));
    assert!(matches!(out, MoveOutcome::Advanced(p) if (p - 40.0).abs() < 1e-3));
}

#[test]
fn test_backtrack_just_under_tolerance_holds() {
    let mut t = line_tracer();
    let tol = t.config().backtrack_tolerance();
    t.pointer_down(Point::new(0.0, 0.0));
    for x in (10..=60).step_by(10) {
        t.pointer_move(Point::new(x as f32, 0.0));
    }
    let progress = t.session().progress();

    let out = t.pointer_move(Point::new(progress - tol + 1.0, 0.0));
    assert_eq!(out, MoveOutcome::Held);
    assert_eq!(t.session().progress(), progress);
    assert_eq!(t.session().phase(), Phase::Tracing);
}

#[test]
fn test_backtrack_just_over_tolerance_rejected() {
    let mut t = line_tracer();
    let tol = t.config().backtrack_tolerance();
    t.pointer_down(Point::new(0.0, 0.0));
    for x in (10..=60).step_by(10) {
        t.pointer_move(Point::new(x as f32, 0.0));
    }
    let progress = t.session().progress();

    let out = t.pointer_move(Point::new(progress - tol - 1.0, 0.0));
    assert!(matches!(out, MoveOutcome::BacktrackRejected { .. }));
    assert_eq!(t.session().progress(), progress);

    // Forward motion still counts afterwards
    assert!(matches!(t.pointer_move(Point::new(70.0, 0.0)), MoveOutcome::Advanced(_)));
}

// ============================================================================
// COMPLETION THRESHOLD
// ============================================================================

#[test]
fn test_completion_predicate_boundary() {
    let total = 100.0;
    let fraction = 0.985;
    let threshold = total * fraction;
    assert!(meets_completion(threshold, total, fraction));
    assert!(!meets_completion(threshold - 1e-3, total, fraction));
}

#[test]
fn test_release_just_short_does_not_commit() {
    let mut t = line_tracer();
    let sampled = t.guides().get(0).unwrap().sampled().clone();
    let threshold = sampled.total_length() * t.config().completion_fraction;
    let first_ok = sampled.cum_len().iter().position(|&l| l >= threshold).unwrap();
    assert!(first_ok > 0);

    t.pointer_down(sampled.points()[0]);
    for p in &sampled.points()[..first_ok] {
        t.pointer_move(*p);
    }
    assert!(t.session().progress() < threshold);
    assert!(matches!(t.pointer_up(), ReleaseOutcome::Incomplete { .. }));
    assert!(t.get_paths().is_empty());
    assert!(t.observer().changes.is_empty());
    assert_eq!(t.session().progress(), 0.0);
}

#[test]
fn test_release_at_threshold_commits() {
    let mut t = line_tracer();
    let sampled = t.guides().get(0).unwrap().sampled().clone();
    let threshold = sampled.total_length() * t.config().completion_fraction;
    let first_ok = sampled.cum_len().iter().position(|&l| l >= threshold).unwrap();

    t.pointer_down(sampled.points()[0]);
    for p in &sampled.points()[..=first_ok] {
        t.pointer_move(*p);
    }
    assert!(t.session().progress() >= threshold);
    assert!(matches!(t.pointer_up(), ReleaseOutcome::Committed { .. }));
    assert_eq!(t.get_paths().len(), 1);
}

// ============================================================================
// ARMING AND CANCEL
// ============================================================================

#[test]
fn test_touch_far_from_start_never_arms() {
    let mut t = line_tracer();
    assert!(matches!(t.pointer_down(Point::new(90.0, 0.0)), ArmOutcome::OutOfReach { .. }));
    assert_eq!(t.pointer_move(Point::new(100.0, 0.0)), MoveOutcome::NotArmed);
    assert_eq!(t.pointer_up(), ReleaseOutcome::NotArmed);
    assert!(t.get_paths().is_empty());
}

#[test]
fn test_capture_radius_scales_with_canvas() {
    // Same relative offset hits on both canvas sizes
    let mut small = line_tracer().with_size(200.0, 200.0);
    let mut large = line_tracer().with_size(1600.0, 1600.0);
    assert_eq!(small.pointer_down(Point::new(10.0, 0.0)), ArmOutcome::Armed);
    assert_eq!(large.pointer_down(Point::new(80.0, 0.0)), ArmOutcome::Armed);
    assert!(matches!(large.pointer_down(Point::new(200.0, 0.0)), ArmOutcome::OutOfReach { .. }));
}

#[test]
fn test_cancel_requires_rearm() {
    let mut t = line_tracer();
    t.handle(PointerEvent::Down(Point::new(0.0, 0.0)));
    t.handle(PointerEvent::Move(Point::new(50.0, 0.0)));
    assert_eq!(t.handle(PointerEvent::Cancel), TraceOutcome::Cancelled);
    assert!(t.session().progress() > 0.0);
    assert_eq!(t.handle(PointerEvent::Move(Point::new(60.0, 0.0))), TraceOutcome::Move(MoveOutcome::NotArmed));

    assert_eq!(t.handle(PointerEvent::Down(Point::new(0.0, 0.0))), TraceOutcome::Down(ArmOutcome::Armed));
    assert_eq!(t.session().progress(), 0.0);
}

#[test]
fn test_degenerate_canvas_does_not_panic() {
    let mut t = line_tracer().with_size(0.0, 0.0);
    t.pointer_down(Point::new(0.0, 0.0));
    t.pointer_move(Point::new(f32::NAN, 1.0));
    t.pointer_up();
}

// ============================================================================
// MULTI-STROKE, UNDO, CLEAR
// ============================================================================

#[test]
fn test_strokes_traced_in_order() {
    let mut t = two_stroke_tracer();
    // Second stroke's start does not arm while the first is active
    assert!(matches!(t.pointer_down(Point::new(100.0, 300.0)), ArmOutcome::OutOfReach { .. }));

    complete_stroke(&mut t);
    assert_eq!(t.session().active_stroke(), 1);
    complete_stroke(&mut t);
    assert!(t.is_complete());
    assert_eq!(t.get_paths(), vec!["M 100 100 L 300 100".to_string(), "M 100 300 L 300 300".to_string()]);
    assert_eq!(t.observer().completed.len(), 2);
    assert_eq!(t.observer().changes.len(), 2);

    // Nothing left to arm
    assert_eq!(t.pointer_down(Point::new(100.0, 100.0)), ArmOutcome::NothingToTrace);
}

#[test]
fn test_undo_decrements_by_one() {
    let mut t = two_stroke_tracer();
    complete_stroke(&mut t);
    complete_stroke(&mut t);

    t.undo();
    assert_eq!(t.get_paths().len(), 1);
    assert_eq!(t.session().active_stroke(), 1);
    t.undo();
    assert_eq!(t.get_paths().len(), 0);
    t.undo();
    assert_eq!(t.get_paths().len(), 0);
    assert_eq!(t.session().active_stroke(), 0);
    assert!(t.observer().latest().is_empty());
}

#[test]
fn test_undo_rewinds_to_same_stroke() {
    let mut t = two_stroke_tracer();
    complete_stroke(&mut t);
    t.undo();
    assert_eq!(t.pointer_down(Point::new(100.0, 100.0)), ArmOutcome::Armed);
}

#[test]
fn test_clear_resets() {
    let mut t = two_stroke_tracer();
    complete_stroke(&mut t);
    t.pointer_down(Point::new(100.0, 300.0));
    t.clear();
    assert!(t.get_paths().is_empty());
    assert_eq!(t.session().active_stroke(), 0);
    assert_eq!(t.session().progress(), 0.0);
    assert!(!t.session().is_armed());
    assert_eq!(t.observer().latest(), &[] as &[String]);
}

#[test]
fn test_switching_letter_discards_progress() {
    let mut t = two_stroke_tracer();
    complete_stroke(&mut t);
    t.pointer_down(Point::new(100.0, 300.0));
    t.pointer_move(Point::new(200.0, 300.0));

    t.set_guides(letters::guide_for('T').unwrap());
    assert_eq!(t.session(), &TraceSession::default());
    assert_eq!(t.guides().len(), 2);
}

#[test]
fn test_builtin_letter_traces() {
    let mut t = Tracer::new(letters::guide_for('S').unwrap(), TracerConfig::default());
    complete_stroke(&mut t);
    assert!(t.is_complete());
}

#[test]
fn test_round_letters_need_the_whole_stroke() {
    for letter in ['O', 'Q', 'o'] {
        let mut t = Tracer::new(letters::guide_for(letter).unwrap(), TracerConfig::default());
        let start = t.guides().get(0).unwrap().sampled().start().unwrap();
        assert_eq!(t.pointer_down(start), ArmOutcome::Armed);
        t.pointer_move(Point::new(start.x + 4.0, start.y));
        assert!(t.session().progress() < 20.0, "{letter}: {}", t.session().progress());
        assert!(matches!(t.pointer_up(), ReleaseOutcome::Incomplete { .. }), "{letter}");
        assert!(t.get_paths().is_empty());
    }
}

#[test]
fn test_round_letter_arcs_traced_in_order() {
    let mut t = Tracer::new(letters::guide_for('O').unwrap(), TracerConfig::default());
    complete_stroke(&mut t);
    complete_stroke(&mut t);
    assert!(t.is_complete());
    assert_eq!(t.get_paths().len(), 2);
}

// ============================================================================
// ROUNDS
// ============================================================================

#[test]
fn test_deterministic_pick_examples() {
    let pool = ["a", "b", "c", "d"];
    assert_eq!(deterministic_pick(&pool, 2, 2), vec!["c", "d"]);
    assert_eq!(deterministic_pick(&pool, 3, 2), vec!["a", "b"]);
}

#[test]
fn test_place_correct_repeatable() {
    let a = place_correct(&["X", "Y", "Z"], "Y", "cat");
    let b = place_correct(&["X", "Y", "Z"], "Y", "cat");
    assert_eq!(a.correct_index, b.correct_index);
    assert_eq!(a.choices[a.correct_index], "Y");
}

#[test]
fn test_round_reproducible_from_index() {
    let pool = ["bat", "cat", "hat", "mat", "rat", "sat"];
    for round in 1..=6 {
        assert_eq!(build_round(&pool, round, 3), build_round(&pool, round, 3));
    }
}
