use crate::annotation::VideoPosition;
use crate::consts::{DEPTH_FACTOR, DEPTH_LIFT_PIXELS, ISOMETRIC_SCALE, ISOMETRIC_SHEAR, PERSPECTIVE_ANGLE_DEGREES};
use crate::frame::{FrameSize, PerspectiveMode};

use glam::{DAffine2, DVec2};

/// Maps a captured point in video pixel space to where it is displayed under the simulated elevated camera.
///
/// The offset from the frame center is foreshortened vertically by `cos(30°)`, sheared horizontally by half of its
/// foreshortened vertical component, and lifted by a pseudo-depth term so points further down the frame rise slightly.
/// The center of the frame is a fixed point.
///
/// A degenerate frame (zero, negative or non-finite size) returns the point unchanged rather than dividing by zero.
pub fn transform(point: VideoPosition, frame: FrameSize) -> VideoPosition {
	if frame.is_degenerate() {
		return point;
	}

	let center = frame.center();
	let relative = point - center;
	let depth = (relative.y / frame.height) * DEPTH_FACTOR;

	DVec2::new(
		center.x + relative.x + relative.y * ISOMETRIC_SHEAR * ISOMETRIC_SCALE,
		center.y + relative.y * ISOMETRIC_SCALE - depth * DEPTH_LIFT_PIXELS,
	)
}

/// Same as [`transform`] in isometric mode, the identity in flat mode.
pub fn transform_with_mode(point: VideoPosition, frame: FrameSize, mode: PerspectiveMode) -> VideoPosition {
	match mode {
		PerspectiveMode::Flat => point,
		PerspectiveMode::Isometric => transform(point, frame),
	}
}

/// The static horizontal skew applied when painting, pivoting around the vertical center of the frame.
/// This only affects how the surface paints shapes and is never baked into stored points.
pub fn perspective_skew(frame: FrameSize, mode: PerspectiveMode) -> DAffine2 {
	if mode == PerspectiveMode::Flat || frame.is_degenerate() {
		return DAffine2::IDENTITY;
	}

	let shear = PERSPECTIVE_ANGLE_DEGREES.to_radians().tan();
	let pivot_y = frame.center().y;

	// x' = x + shear * (y - pivot_y)
	DAffine2::from_cols(DVec2::X, DVec2::new(shear, 1.), DVec2::new(-shear * pivot_y, 0.))
}
