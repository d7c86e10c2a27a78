//! Pose snapshots, body-part indices and the geometry used by the analyzers.

pub mod confidence;
pub mod geometry;
pub mod landmarks;

pub use confidence::{is_reliable, mean_visibility};
pub use geometry::{angle_between_points, midpoint};
pub use landmarks::{Landmark, Pose, PoseLandmark, POSE_LANDMARK_COUNT};
