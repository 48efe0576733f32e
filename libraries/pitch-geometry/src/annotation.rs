use crate::color::Color;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Origin is the top left of the video frame, in pixels
pub type VideoPosition = DVec2;

/// Every kind of tactical drawing the overlay knows how to capture and paint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnotationType {
	Circle,
	Line,
	Arrow,
	Distance,
	Spotlight,
	Trajectory,
	Area,
	OffsideLine,
	PressureZone,
	PassingLane,
	EllipseLight,
	Cone,
}

impl AnnotationType {
	pub const COUNT: usize = 12;

	pub const ALL: [AnnotationType; Self::COUNT] = [
		AnnotationType::Circle,
		AnnotationType::Line,
		AnnotationType::Arrow,
		AnnotationType::Distance,
		AnnotationType::Spotlight,
		AnnotationType::Trajectory,
		AnnotationType::Area,
		AnnotationType::OffsideLine,
		AnnotationType::PressureZone,
		AnnotationType::PassingLane,
		AnnotationType::EllipseLight,
		AnnotationType::Cone,
	];

	/// Position of this variant in [`AnnotationType::ALL`], used to index per-type lookup tables.
	pub const fn index(self) -> usize {
		match self {
			AnnotationType::Circle => 0,
			AnnotationType::Line => 1,
			AnnotationType::Arrow => 2,
			AnnotationType::Distance => 3,
			AnnotationType::Spotlight => 4,
			AnnotationType::Trajectory => 5,
			AnnotationType::Area => 6,
			AnnotationType::OffsideLine => 7,
			AnnotationType::PressureZone => 8,
			AnnotationType::PassingLane => 9,
			AnnotationType::EllipseLight => 10,
			AnnotationType::Cone => 11,
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			AnnotationType::Circle => "circle",
			AnnotationType::Line => "line",
			AnnotationType::Arrow => "arrow",
			AnnotationType::Distance => "distance",
			AnnotationType::Spotlight => "spotlight",
			AnnotationType::Trajectory => "trajectory",
			AnnotationType::Area => "area",
			AnnotationType::OffsideLine => "offside-line",
			AnnotationType::PressureZone => "pressure-zone",
			AnnotationType::PassingLane => "passing-lane",
			AnnotationType::EllipseLight => "ellipse-light",
			AnnotationType::Cone => "cone",
		}
	}

	pub const fn family(self) -> ShapeFamily {
		match self {
			AnnotationType::Circle | AnnotationType::Spotlight | AnnotationType::PressureZone | AnnotationType::EllipseLight | AnnotationType::Cone => ShapeFamily::Radius,
			AnnotationType::Line | AnnotationType::Arrow | AnnotationType::Distance | AnnotationType::Trajectory | AnnotationType::Area | AnnotationType::PassingLane => ShapeFamily::TwoEndpoint,
			AnnotationType::OffsideLine => ShapeFamily::Anchor,
		}
	}

	pub const fn point_requirement(self) -> PointRequirement {
		self.family().point_requirement()
	}

	/// Glow and zone style shapes carry an intensity in addition to their points.
	pub const fn has_intensity(self) -> bool {
		matches!(self, AnnotationType::Spotlight | AnnotationType::PressureZone | AnnotationType::EllipseLight | AnnotationType::Cone)
	}
}

impl fmt::Display for AnnotationType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown annotation type `{0}`")]
pub struct UnknownAnnotationType(pub String);

impl FromStr for AnnotationType {
	type Err = UnknownAnnotationType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		AnnotationType::ALL.into_iter().find(|kind| kind.as_str() == s).ok_or_else(|| UnknownAnnotationType(s.to_string()))
	}
}

/// How a tool turns a pointer gesture into points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeFamily {
	/// The origin is the center, an optional second point encodes the radius as a horizontal offset from it.
	Radius,
	/// Start and end of the drag.
	TwoEndpoint,
	/// A single point that follows the cursor while dragging. Sets saved as an endpoint pair keep the second point, which is never read.
	Anchor,
}

impl ShapeFamily {
	pub const fn point_requirement(self) -> PointRequirement {
		match self {
			ShapeFamily::Radius => PointRequirement { min: 1, max: 2 },
			ShapeFamily::TwoEndpoint => PointRequirement { min: 2, max: 2 },
			ShapeFamily::Anchor => PointRequirement { min: 1, max: 2 },
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointRequirement {
	pub min: usize,
	pub max: usize,
}

impl PointRequirement {
	pub const fn accepts(&self, count: usize) -> bool {
		count >= self.min && count <= self.max
	}
}

impl fmt::Display for PointRequirement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.min == self.max { write!(f, "{}", self.min) } else { write!(f, "{} to {}", self.min, self.max) }
	}
}

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnnotationId(#[serde(with = "u64_string")] pub u64);

impl fmt::Display for AnnotationId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

mod u64_string {
	use serde::{Deserialize, Deserializer, Serializer};

	#[derive(Deserialize)]
	#[serde(untagged)]
	enum StringOrNumber {
		String(String),
		Number(u64),
	}

	pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&value.to_string())
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
		match StringOrNumber::deserialize(deserializer)? {
			StringOrNumber::String(s) => s.parse().map_err(serde::de::Error::custom),
			StringOrNumber::Number(n) => Ok(n),
		}
	}
}

mod point_list {
	use super::VideoPosition;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	#[derive(Serialize, Deserialize)]
	struct PointRecord {
		x: f64,
		y: f64,
	}

	pub fn serialize<S: Serializer>(points: &[VideoPosition], serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_seq(points.iter().map(|point| PointRecord { x: point.x, y: point.y }))
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<VideoPosition>, D::Error> {
		let records = Vec::<PointRecord>::deserialize(deserializer)?;
		Ok(records.into_iter().map(|PointRecord { x, y }| VideoPosition::new(x, y)).collect())
	}
}

/// A committed tactical drawing. Annotations are never edited in place; a change is a removal followed by a new commit.
///
/// Points are kept exactly as captured in video pixel space, so the display transform can change without migrating saved data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
	pub(crate) id: AnnotationId,
	#[serde(rename = "type")]
	pub(crate) kind: AnnotationType,
	#[serde(with = "point_list")]
	pub(crate) points: Vec<VideoPosition>,
	pub(crate) color: Color,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub(crate) measurement: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub(crate) intensity: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub(crate) label: Option<String>,
	/// Video playback time, in seconds, at which the annotation was committed.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub(crate) timestamp: Option<f64>,
}

impl Annotation {
	pub fn id(&self) -> AnnotationId {
		self.id
	}

	pub fn kind(&self) -> AnnotationType {
		self.kind
	}

	pub fn points(&self) -> &[VideoPosition] {
		&self.points
	}

	pub fn color(&self) -> Color {
		self.color
	}

	pub fn measurement(&self) -> Option<f64> {
		self.measurement
	}

	pub fn intensity(&self) -> Option<f64> {
		self.intensity
	}

	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	pub fn timestamp(&self) -> Option<f64> {
		self.timestamp
	}

	/// Copy of this annotation under a different identifier, used when records from another session are brought in.
	pub fn with_id(&self, id: AnnotationId) -> Self {
		Self { id, ..self.clone() }
	}
}
