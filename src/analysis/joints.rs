//! Joint chains and body reference points shared by the analyzers.

use crate::pose::{angle_between_points, midpoint, Pose, PoseLandmark};

/// Three landmarks forming an angle at the middle one.
pub type JointChain = [PoseLandmark; 3];

pub const LEFT_KNEE: JointChain = [
    PoseLandmark::LeftHip,
    PoseLandmark::LeftKnee,
    PoseLandmark::LeftAnkle,
];
pub const RIGHT_KNEE: JointChain = [
    PoseLandmark::RightHip,
    PoseLandmark::RightKnee,
    PoseLandmark::RightAnkle,
];

pub const LEFT_HIP: JointChain = [
    PoseLandmark::LeftShoulder,
    PoseLandmark::LeftHip,
    PoseLandmark::LeftKnee,
];
pub const RIGHT_HIP: JointChain = [
    PoseLandmark::RightShoulder,
    PoseLandmark::RightHip,
    PoseLandmark::RightKnee,
];

pub const LEFT_ELBOW: JointChain = [
    PoseLandmark::LeftShoulder,
    PoseLandmark::LeftElbow,
    PoseLandmark::LeftWrist,
];
pub const RIGHT_ELBOW: JointChain = [
    PoseLandmark::RightShoulder,
    PoseLandmark::RightElbow,
    PoseLandmark::RightWrist,
];

/// Upper arm against torso, measured at the shoulder.
pub const LEFT_FLARE: JointChain = [
    PoseLandmark::LeftElbow,
    PoseLandmark::LeftShoulder,
    PoseLandmark::LeftHip,
];
pub const RIGHT_FLARE: JointChain = [
    PoseLandmark::RightElbow,
    PoseLandmark::RightShoulder,
    PoseLandmark::RightHip,
];

/// Torso and legs: gate for the squat, deadlift and generic analyzers.
pub const LOWER_BODY_JOINTS: [PoseLandmark; 8] = [
    PoseLandmark::LeftShoulder,
    PoseLandmark::RightShoulder,
    PoseLandmark::LeftHip,
    PoseLandmark::RightHip,
    PoseLandmark::LeftKnee,
    PoseLandmark::RightKnee,
    PoseLandmark::LeftAnkle,
    PoseLandmark::RightAnkle,
];

/// Arms and torso: gate for the pressing analyzers.
pub const UPPER_BODY_JOINTS: [PoseLandmark; 8] = [
    PoseLandmark::LeftShoulder,
    PoseLandmark::RightShoulder,
    PoseLandmark::LeftElbow,
    PoseLandmark::RightElbow,
    PoseLandmark::LeftWrist,
    PoseLandmark::RightWrist,
    PoseLandmark::LeftHip,
    PoseLandmark::RightHip,
];

/// Angle of one chain, in degrees.
pub fn chain_angle(pose: &Pose, chain: JointChain) -> f32 {
    let [a, vertex, c] = chain;
    angle_between_points(pose.point(a), pose.point(vertex), pose.point(c))
}

/// Mean of the left and right chain angles.
pub fn bilateral_angle(pose: &Pose, left: JointChain, right: JointChain) -> f32 {
    (chain_angle(pose, left) + chain_angle(pose, right)) / 2.0
}

pub fn shoulder_midpoint(pose: &Pose) -> (f32, f32) {
    midpoint(
        pose.point(PoseLandmark::LeftShoulder),
        pose.point(PoseLandmark::RightShoulder),
    )
}

pub fn hip_midpoint(pose: &Pose) -> (f32, f32) {
    midpoint(
        pose.point(PoseLandmark::LeftHip),
        pose.point(PoseLandmark::RightHip),
    )
}

/// Horizontal distance between the shoulder and hip midpoints.
pub fn torso_horizontal_offset(pose: &Pose) -> f32 {
    (shoulder_midpoint(pose).0 - hip_midpoint(pose).0).abs()
}
