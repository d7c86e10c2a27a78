//! End-to-end tests: raw landmarks through analysis into the rep counter.

use liftform::analysis::{ExerciseAnalyzer, SquatAnalyzer};
use liftform::{
    analyze_frame, create_rep_counter, update_rep_counter, Phase, Pose, RepCounterState,
};

use crate::fixtures::{deep_squat_pose, landmarks, standing_pose, with_visibility};

fn step(state: RepCounterState, pose: &Pose, timestamp_ms: u64) -> RepCounterState {
    let result = analyze_frame(Some("Barbell Back Squat"), &landmarks(pose)).unwrap();
    update_rep_counter(state, result.rep_metric, result.phase, timestamp_ms)
}

#[test]
fn test_standing_then_deep_squat() {
    let p1 = SquatAnalyzer::DEFAULT.analyze(&standing_pose());
    assert_eq!(p1.phase, Some(Phase::Up));
    assert!(p1.rep_metric.unwrap() > 0.5);
    assert!(p1.has_cue("deeper"));

    let p2 = SquatAnalyzer::DEFAULT.analyze(&deep_squat_pose());
    assert!(p2.rep_metric.unwrap() < p1.rep_metric.unwrap());
}

#[test]
fn test_squat_video_counts_reps() {
    let standing = standing_pose();
    let deep = deep_squat_pose();

    let mut state = create_rep_counter();
    let mut t = 0;
    for _ in 0..3 {
        for _ in 0..5 {
            state = step(state, &standing, t);
            t += 100;
        }
        for _ in 0..5 {
            state = step(state, &deep, t);
            t += 100;
        }
    }
    // Stand up from the last squat
    state = step(state, &standing, t);

    // Starting from standing, the first up frame never counts
    assert_eq!(state.count, 3);
}

#[test]
fn test_occluded_frames_do_not_break_counting() {
    let standing = standing_pose();
    let deep = deep_squat_pose();
    let occluded = with_visibility(deep, 0.1);

    let mut state = create_rep_counter();
    state = step(state, &deep, 0);
    state = step(state, &deep, 100);
    // Camera loses the lifter for a moment
    let before = state;
    state = step(state, &occluded, 200);
    assert_eq!(state, before);
    state = step(state, &occluded, 300);
    state = step(state, &standing, 400);

    assert_eq!(state.count, 1);
}

#[test]
fn test_json_frame_without_visibility_is_measured() {
    let points: Vec<String> = landmarks(&standing_pose())
        .iter()
        .map(|lm| format!(r#"{{"x":{},"y":{}}}"#, lm.x, lm.y))
        .collect();
    let json = format!("[{}]", points.join(","));

    let raw: Vec<liftform::Landmark> = serde_json::from_str(&json).unwrap();
    let result = analyze_frame(Some("squat"), &raw).unwrap();

    assert!(result.is_reliable());
    assert_eq!(result.phase, Some(Phase::Up));
}
