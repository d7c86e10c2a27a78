//! Landmark types and the fixed body-part index mapping.
//!
//! Landmarks arrive from the upstream pose model as 33 normalized keypoints
//! per frame, in the MediaPipe Pose ordering. Coordinates are in image space:
//! `x` grows to the right and `y` grows downward, both in `[0, 1]`.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::analysis::error::PoseError;

/// Number of landmarks in one pose snapshot.
pub const POSE_LANDMARK_COUNT: usize = 33;

/// A single normalized body keypoint.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position (0-1 normalized)
    pub x: f32,
    /// Vertical position (0-1 normalized, grows downward)
    pub y: f32,
    /// Relative depth; not used for angle math
    #[serde(default)]
    pub z: f32,
    /// Detection confidence (0-1); models that omit it are taken as fully visible
    #[serde(default = "default_visibility")]
    pub visibility: f32,
}

fn default_visibility() -> f32 {
    1.0
}

impl Landmark {
    /// Create a landmark with the given position and visibility.
    pub const fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }

    /// Create a fully visible landmark at a 2D position.
    pub const fn at(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0, 1.0)
    }

    /// 2D position used by the geometry helpers.
    pub fn point(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// Body parts of the 33-point pose model, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum PoseLandmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl PoseLandmark {
    /// Every body part, ordered by index.
    pub const ALL: [PoseLandmark; POSE_LANDMARK_COUNT] = [
        PoseLandmark::Nose,
        PoseLandmark::LeftEyeInner,
        PoseLandmark::LeftEye,
        PoseLandmark::LeftEyeOuter,
        PoseLandmark::RightEyeInner,
        PoseLandmark::RightEye,
        PoseLandmark::RightEyeOuter,
        PoseLandmark::LeftEar,
        PoseLandmark::RightEar,
        PoseLandmark::MouthLeft,
        PoseLandmark::MouthRight,
        PoseLandmark::LeftShoulder,
        PoseLandmark::RightShoulder,
        PoseLandmark::LeftElbow,
        PoseLandmark::RightElbow,
        PoseLandmark::LeftWrist,
        PoseLandmark::RightWrist,
        PoseLandmark::LeftPinky,
        PoseLandmark::RightPinky,
        PoseLandmark::LeftIndex,
        PoseLandmark::RightIndex,
        PoseLandmark::LeftThumb,
        PoseLandmark::RightThumb,
        PoseLandmark::LeftHip,
        PoseLandmark::RightHip,
        PoseLandmark::LeftKnee,
        PoseLandmark::RightKnee,
        PoseLandmark::LeftAnkle,
        PoseLandmark::RightAnkle,
        PoseLandmark::LeftHeel,
        PoseLandmark::RightHeel,
        PoseLandmark::LeftFootIndex,
        PoseLandmark::RightFootIndex,
    ];

    /// Position of this body part in the landmark array.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a body part by array index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Upper-snake-case name, matching the upstream model's documentation.
    pub fn name(self) -> &'static str {
        match self {
            PoseLandmark::Nose => "NOSE",
            PoseLandmark::LeftEyeInner => "LEFT_EYE_INNER",
            PoseLandmark::LeftEye => "LEFT_EYE",
            PoseLandmark::LeftEyeOuter => "LEFT_EYE_OUTER",
            PoseLandmark::RightEyeInner => "RIGHT_EYE_INNER",
            PoseLandmark::RightEye => "RIGHT_EYE",
            PoseLandmark::RightEyeOuter => "RIGHT_EYE_OUTER",
            PoseLandmark::LeftEar => "LEFT_EAR",
            PoseLandmark::RightEar => "RIGHT_EAR",
            PoseLandmark::MouthLeft => "MOUTH_LEFT",
            PoseLandmark::MouthRight => "MOUTH_RIGHT",
            PoseLandmark::LeftShoulder => "LEFT_SHOULDER",
            PoseLandmark::RightShoulder => "RIGHT_SHOULDER",
            PoseLandmark::LeftElbow => "LEFT_ELBOW",
            PoseLandmark::RightElbow => "RIGHT_ELBOW",
            PoseLandmark::LeftWrist => "LEFT_WRIST",
            PoseLandmark::RightWrist => "RIGHT_WRIST",
            PoseLandmark::LeftPinky => "LEFT_PINKY",
            PoseLandmark::RightPinky => "RIGHT_PINKY",
            PoseLandmark::LeftIndex => "LEFT_INDEX",
            PoseLandmark::RightIndex => "RIGHT_INDEX",
            PoseLandmark::LeftThumb => "LEFT_THUMB",
            PoseLandmark::RightThumb => "RIGHT_THUMB",
            PoseLandmark::LeftHip => "LEFT_HIP",
            PoseLandmark::RightHip => "RIGHT_HIP",
            PoseLandmark::LeftKnee => "LEFT_KNEE",
            PoseLandmark::RightKnee => "RIGHT_KNEE",
            PoseLandmark::LeftAnkle => "LEFT_ANKLE",
            PoseLandmark::RightAnkle => "RIGHT_ANKLE",
            PoseLandmark::LeftHeel => "LEFT_HEEL",
            PoseLandmark::RightHeel => "RIGHT_HEEL",
            PoseLandmark::LeftFootIndex => "LEFT_FOOT_INDEX",
            PoseLandmark::RightFootIndex => "RIGHT_FOOT_INDEX",
        }
    }
}

impl std::fmt::Display for PoseLandmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One frame's full set of landmarks.
///
/// The array length is fixed by the type, so analyzers can index body parts
/// without bounds checks. Untrusted input goes through [`Pose::from_slice`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    landmarks: [Landmark; POSE_LANDMARK_COUNT],
}

impl Pose {
    /// Wrap an already-sized landmark array.
    pub fn new(landmarks: [Landmark; POSE_LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Validate and copy landmarks received from the pose model.
    pub fn from_slice(landmarks: &[Landmark]) -> Result<Self, PoseError> {
        let landmarks: [Landmark; POSE_LANDMARK_COUNT] =
            landmarks.try_into().map_err(|_| PoseError::InvalidLength {
                expected: POSE_LANDMARK_COUNT,
                actual: landmarks.len(),
            })?;
        Ok(Self { landmarks })
    }

    /// Landmark for a body part.
    pub fn get(&self, part: PoseLandmark) -> Landmark {
        self.landmarks[part.index()]
    }

    /// 2D position of a body part.
    pub fn point(&self, part: PoseLandmark) -> (f32, f32) {
        self.get(part).point()
    }

    /// Replace the landmark for a body part.
    pub fn set(&mut self, part: PoseLandmark, landmark: Landmark) {
        self.landmarks[part.index()] = landmark;
    }

    /// All landmarks in index order.
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Mutable access to all landmarks in index order.
    pub fn landmarks_mut(&mut self) -> &mut [Landmark] {
        &mut self.landmarks
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new([Landmark::default(); POSE_LANDMARK_COUNT])
    }
}

impl Index<PoseLandmark> for Pose {
    type Output = Landmark;

    fn index(&self, part: PoseLandmark) -> &Self::Output {
        &self.landmarks[part.index()]
    }
}
