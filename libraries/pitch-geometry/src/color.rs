use crate::annotation::AnnotationType;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An 8-bit sRGB color with alpha, serialized as a `#rrggbb` or `#rrggbbaa` hex string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
	red: u8,
	green: u8,
	blue: u8,
	alpha: u8,
}

impl Color {
	pub const WHITE: Color = Color::from_rgb8(0xff, 0xff, 0xff);
	pub const BLACK: Color = Color::from_rgb8(0x00, 0x00, 0x00);

	pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
		Self { red, green, blue, alpha: 0xff }
	}

	pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
		Self { red, green, blue, alpha }
	}

	pub fn r(&self) -> u8 {
		self.red
	}

	pub fn g(&self) -> u8 {
		self.green
	}

	pub fn b(&self) -> u8 {
		self.blue
	}

	/// Opacity in the range `[0, 1]`.
	pub fn a(&self) -> f64 {
		self.alpha as f64 / 255.
	}

	/// Replaces the opacity, clamped to `[0, 1]`.
	pub fn with_alpha(self, alpha: f64) -> Self {
		let alpha = (alpha.clamp(0., 1.) * 255.).round() as u8;
		Self { alpha, ..self }
	}

	/// Multiplies the current opacity by `factor`.
	pub fn fade(self, factor: f64) -> Self {
		self.with_alpha(self.a() * factor)
	}

	/// Channel-wise linear interpolation towards `other`, with `t` clamped to `[0, 1]`.
	pub fn lerp(&self, other: &Color, t: f64) -> Color {
		let t = t.clamp(0., 1.);
		let mix = |from: u8, to: u8| (from as f64 + (to as f64 - from as f64) * t).round() as u8;
		Color::from_rgba8(mix(self.red, other.red), mix(self.green, other.green), mix(self.blue, other.blue), mix(self.alpha, other.alpha))
	}

	pub fn to_rgba_hex(&self) -> String {
		if self.alpha == 0xff {
			format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
		} else {
			format!("#{:02x}{:02x}{:02x}{:02x}", self.red, self.green, self.blue, self.alpha)
		}
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_rgba_hex())
	}
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
	#[error("color `{0}` must have 6 or 8 hex digits")]
	InvalidLength(String),
	#[error("color `{0}` contains a character that is not a hex digit")]
	InvalidDigit(String),
}

impl FromStr for Color {
	type Err = ColorParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let digits = s.strip_prefix('#').unwrap_or(s);
		if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
			return Err(ColorParseError::InvalidLength(s.to_string()));
		}

		let channel = |index: usize| u8::from_str_radix(&digits[index * 2..index * 2 + 2], 16).map_err(|_| ColorParseError::InvalidDigit(s.to_string()));
		let alpha = if digits.len() == 8 { channel(3)? } else { 0xff };

		Ok(Color::from_rgba8(channel(0)?, channel(1)?, channel(2)?, alpha))
	}
}

impl TryFrom<String> for Color {
	type Error = ColorParseError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Color> for String {
	fn from(color: Color) -> Self {
		color.to_rgba_hex()
	}
}

/// Default stroke color for each annotation type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorTable {
	colors: [Color; AnnotationType::COUNT],
}

impl ColorTable {
	pub const DEFAULT: ColorTable = ColorTable {
		colors: [
			Color::from_rgb8(0xff, 0xeb, 0x3b), // Circle
			Color::from_rgb8(0xff, 0xff, 0xff), // Line
			Color::from_rgb8(0xff, 0x57, 0x22), // Arrow
			Color::from_rgb8(0x00, 0xbc, 0xd4), // Distance
			Color::from_rgb8(0xff, 0xf9, 0xc4), // Spotlight
			Color::from_rgb8(0x9c, 0x27, 0xb0), // Trajectory
			Color::from_rgb8(0x4c, 0xaf, 0x50), // Area
			Color::from_rgb8(0xf4, 0x43, 0x36), // OffsideLine
			Color::from_rgb8(0xff, 0x98, 0x00), // PressureZone
			Color::from_rgb8(0x21, 0x96, 0xf3), // PassingLane
			Color::from_rgb8(0xff, 0xf5, 0x9d), // EllipseLight
			Color::from_rgb8(0xe1, 0xf5, 0xfe), // Cone
		],
	};

	pub fn get(&self, kind: AnnotationType) -> Color {
		self.colors[kind.index()]
	}

	pub fn with_override(mut self, kind: AnnotationType, color: Color) -> Self {
		self.colors[kind.index()] = color;
		self
	}
}

impl Default for ColorTable {
	fn default() -> Self {
		Self::DEFAULT
	}
}
