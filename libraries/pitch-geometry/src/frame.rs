use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Pixel dimensions of the video frame the overlay sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSize {
	pub width: f64,
	pub height: f64,
}

impl FrameSize {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// A frame with no usable area, typically because the video metadata has not loaded yet.
	/// Nothing may be transformed against or drawn onto such a frame.
	pub fn is_degenerate(&self) -> bool {
		!(self.width.is_finite() && self.height.is_finite() && self.width > 0. && self.height > 0.)
	}

	pub fn center(&self) -> DVec2 {
		self.as_dvec2() / 2.
	}

	pub fn as_dvec2(&self) -> DVec2 {
		DVec2::new(self.width, self.height)
	}
}

/// Whether the overlay simulates an elevated camera or draws straight onto the video plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerspectiveMode {
	Flat,
	#[default]
	Isometric,
}
