//! Synthetic pose fixtures shared by the unit and integration tests.
//!
//! Coordinates are normalized image space with y growing downward, so "above"
//! means a smaller y.

#![allow(dead_code)]

use liftform::{Landmark, Pose, PoseLandmark};

/// Visibility used for "normal" fixtures.
pub const NORMAL_VISIBILITY: f32 = 0.95;

fn base_pose() -> Pose {
    let mut pose = Pose::default();
    for lm in pose.landmarks_mut() {
        *lm = Landmark::new(0.5, 0.5, 0.0, NORMAL_VISIBILITY);
    }
    pose.set(PoseLandmark::Nose, Landmark::new(0.5, 0.15, 0.0, NORMAL_VISIBILITY));
    pose
}

fn place(pose: &mut Pose, part: PoseLandmark, x: f32, y: f32) {
    pose.set(part, Landmark::new(x, y, 0.0, NORMAL_VISIBILITY));
}

/// Upright with straight legs: shoulders over hips over knees over ankles.
pub fn standing_pose() -> Pose {
    let mut pose = base_pose();
    place(&mut pose, PoseLandmark::LeftShoulder, 0.45, 0.3);
    place(&mut pose, PoseLandmark::RightShoulder, 0.55, 0.3);
    place(&mut pose, PoseLandmark::LeftElbow, 0.45, 0.4);
    place(&mut pose, PoseLandmark::RightElbow, 0.55, 0.4);
    place(&mut pose, PoseLandmark::LeftWrist, 0.45, 0.5);
    place(&mut pose, PoseLandmark::RightWrist, 0.55, 0.5);
    place(&mut pose, PoseLandmark::LeftHip, 0.45, 0.5);
    place(&mut pose, PoseLandmark::RightHip, 0.55, 0.5);
    place(&mut pose, PoseLandmark::LeftKnee, 0.45, 0.7);
    place(&mut pose, PoseLandmark::RightKnee, 0.55, 0.7);
    place(&mut pose, PoseLandmark::LeftAnkle, 0.45, 0.9);
    place(&mut pose, PoseLandmark::RightAnkle, 0.55, 0.9);
    pose
}

/// Bottom of a squat: knees bent to roughly 80 degrees, hips still above
/// the ankles, torso upright over the hips.
pub fn deep_squat_pose() -> Pose {
    let mut pose = standing_pose();
    place(&mut pose, PoseLandmark::LeftAnkle, 0.45, 0.9);
    place(&mut pose, PoseLandmark::RightAnkle, 0.55, 0.9);
    place(&mut pose, PoseLandmark::LeftKnee, 0.55, 0.75);
    place(&mut pose, PoseLandmark::RightKnee, 0.65, 0.75);
    place(&mut pose, PoseLandmark::LeftHip, 0.385, 0.678);
    place(&mut pose, PoseLandmark::RightHip, 0.485, 0.678);
    place(&mut pose, PoseLandmark::LeftShoulder, 0.385, 0.478);
    place(&mut pose, PoseLandmark::RightShoulder, 0.485, 0.478);
    pose
}

/// Lying on the bench filmed from above, bar at the chest, elbows tucked.
pub fn bench_bottom_pose() -> Pose {
    let mut pose = base_pose();
    place(&mut pose, PoseLandmark::LeftShoulder, 0.4, 0.4);
    place(&mut pose, PoseLandmark::RightShoulder, 0.6, 0.4);
    place(&mut pose, PoseLandmark::LeftHip, 0.42, 0.7);
    place(&mut pose, PoseLandmark::RightHip, 0.58, 0.7);
    place(&mut pose, PoseLandmark::LeftElbow, 0.33, 0.5);
    place(&mut pose, PoseLandmark::RightElbow, 0.67, 0.5);
    place(&mut pose, PoseLandmark::LeftWrist, 0.33, 0.35);
    place(&mut pose, PoseLandmark::RightWrist, 0.67, 0.35);
    pose
}

/// Move the given body parts by an offset.
pub fn shifted(mut pose: Pose, parts: &[PoseLandmark], dx: f32, dy: f32) -> Pose {
    for part in parts {
        let lm = pose[*part];
        pose.set(*part, Landmark::new(lm.x + dx, lm.y + dy, lm.z, lm.visibility));
    }
    pose
}

/// Set every landmark's visibility.
pub fn with_visibility(mut pose: Pose, visibility: f32) -> Pose {
    for lm in pose.landmarks_mut() {
        lm.visibility = visibility;
    }
    pose
}

/// Raw landmark list, as the pose model would hand it over.
pub fn landmarks(pose: &Pose) -> Vec<Landmark> {
    pose.landmarks().to_vec()
}

pub const SHOULDERS: [PoseLandmark; 2] = [PoseLandmark::LeftShoulder, PoseLandmark::RightShoulder];
pub const HIPS: [PoseLandmark; 2] = [PoseLandmark::LeftHip, PoseLandmark::RightHip];
pub const ELBOWS: [PoseLandmark; 2] = [PoseLandmark::LeftElbow, PoseLandmark::RightElbow];
