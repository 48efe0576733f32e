use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the saved annotation set of one video: the video URL in URL-safe base64, so it can be used as a path segment or storage key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionKey(String);

impl SessionKey {
	pub fn from_video_url(video_url: &str) -> Self {
		Self(URL_SAFE_NO_PAD.encode(video_url.trim()))
	}

	/// The URL this key was made from, or `None` for a key that was not produced by [`SessionKey::from_video_url`].
	pub fn video_url(&self) -> Option<String> {
		let bytes = URL_SAFE_NO_PAD.decode(&self.0).ok()?;
		String::from_utf8(bytes).ok()
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SessionKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
