use pitch_geometry::FrameSize;

/// What the editor knows about the video element the overlay is bound to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VideoState {
	/// Playback position in seconds.
	pub current_time: f64,
	pub duration: f64,
	/// Intrinsic pixel size of the video, degenerate until metadata has loaded.
	pub frame_size: FrameSize,
}

impl VideoState {
	pub fn is_loaded(&self) -> bool {
		!self.frame_size.is_degenerate()
	}
}
