use crate::annotation::{Annotation, AnnotationId, AnnotationType, PointRequirement, VideoPosition};
use crate::color::{Color, ColorTable};
use crate::consts::{ARROW_HEAD_ANGLE_DEGREES, CONE_HEIGHT_FACTOR, DEFAULT_INTENSITY, DISTANCE_FRAME_WIDTH_SCALE, ELLIPSE_LIGHT_FLATTENING, GROUND_PROJECTION, TRAJECTORY_ARC_HEIGHT_FACTOR};
use crate::frame::{FrameSize, PerspectiveMode};

use glam::DVec2;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GeometryError {
	#[error("{kind} expects {expected} point(s) but {found} were captured")]
	PointCount { kind: AnnotationType, expected: PointRequirement, found: usize },

	#[error("cannot measure against a {width}x{height} frame")]
	DegenerateFrame { width: f64, height: f64 },
}

/// Numeric values computed from an annotation's points at commit time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DerivedValues {
	/// Approximate meters, only for [`AnnotationType::Distance`].
	pub measurement: Option<f64>,
	/// Glow or zone strength in `[0, 1]`.
	pub intensity: Option<f64>,
}

pub fn validate_point_count(kind: AnnotationType, points: &[VideoPosition]) -> Result<(), GeometryError> {
	let expected = kind.point_requirement();
	if expected.accepts(points.len()) {
		Ok(())
	} else {
		Err(GeometryError::PointCount { kind, expected, found: points.len() })
	}
}

/// Computes the derived values stored alongside an annotation's points.
///
/// Fails when the number of points does not fit the annotation type, or when a distance is measured against a frame with no width.
pub fn compute_derived(kind: AnnotationType, points: &[VideoPosition], frame: FrameSize) -> Result<DerivedValues, GeometryError> {
	validate_point_count(kind, points)?;

	let derived = match kind {
		AnnotationType::Distance => {
			if frame.is_degenerate() {
				return Err(GeometryError::DegenerateFrame {
					width: frame.width,
					height: frame.height,
				});
			}
			DerivedValues {
				measurement: Some(approximate_meters(points[0], points[1], frame)),
				intensity: None,
			}
		}
		AnnotationType::Spotlight | AnnotationType::PressureZone | AnnotationType::EllipseLight | AnnotationType::Cone => DerivedValues {
			measurement: None,
			intensity: Some(DEFAULT_INTENSITY),
		},
		AnnotationType::Circle | AnnotationType::Line | AnnotationType::Arrow | AnnotationType::Trajectory | AnnotationType::Area | AnnotationType::OffsideLine | AnnotationType::PassingLane => {
			DerivedValues::default()
		}
	};

	Ok(derived)
}

/// Pixel distance as a rounded percentage of the frame width, presented to the user as meters.
pub fn approximate_meters(start: VideoPosition, end: VideoPosition, frame: FrameSize) -> f64 {
	(start.distance(end) / frame.width * DISTANCE_FRAME_WIDTH_SCALE).round()
}

/// Values supplied by the tool options rather than derived from the points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommitOptions {
	pub color: Option<Color>,
	pub label: Option<String>,
	/// Replaces the default intensity for types that carry one.
	pub intensity: Option<f64>,
	pub timestamp: Option<f64>,
}

/// Validates the captured points and turns them into a committed annotation.
pub fn build_annotation(kind: AnnotationType, points: Vec<VideoPosition>, frame: FrameSize, colors: &ColorTable, id: AnnotationId, options: CommitOptions) -> Result<Annotation, GeometryError> {
	let DerivedValues { measurement, intensity } = compute_derived(kind, &points, frame)?;
	let intensity = intensity.map(|default| options.intensity.unwrap_or(default).clamp(0., 1.));
	let label = options.label.filter(|label| !label.trim().is_empty());

	Ok(Annotation {
		id,
		kind,
		points,
		color: options.color.unwrap_or_else(|| colors.get(kind)),
		measurement,
		intensity,
		label,
		timestamp: options.timestamp,
	})
}

/// Radius of a radius-family shape, read back from the horizontal offset of its second point. Zero if only the origin exists.
pub fn radius_of(points: &[VideoPosition]) -> f64 {
	match points {
		[origin, edge, ..] => (edge.x - origin.x).abs(),
		_ => 0.,
	}
}

/// Encodes the distance from `origin` to `cursor` as a point horizontally offset from the origin.
pub fn radius_point(origin: VideoPosition, cursor: VideoPosition) -> VideoPosition {
	origin + DVec2::X * origin.distance(cursor)
}

pub fn arrow_direction(start: VideoPosition, end: VideoPosition) -> f64 {
	let delta = end - start;
	delta.y.atan2(delta.x)
}

/// The tip and two barbs of an arrowhead at `end`, pointing away from `start`.
pub fn arrow_head(start: DVec2, end: DVec2, length: f64) -> [DVec2; 3] {
	let angle = arrow_direction(start, end);
	let spread = ARROW_HEAD_ANGLE_DEGREES.to_radians();
	let barb = |offset: f64| end - length * DVec2::from_angle(angle + offset);

	[end, barb(-spread), barb(spread)]
}

/// Radii of a circle lying on the pitch as seen by the display camera.
pub fn ellipse_projection(radius: f64, mode: PerspectiveMode) -> DVec2 {
	match mode {
		PerspectiveMode::Flat => DVec2::splat(radius),
		PerspectiveMode::Isometric => DVec2::new(radius, radius * GROUND_PROJECTION),
	}
}

pub fn ellipse_light_radii(radius: f64) -> DVec2 {
	DVec2::new(radius, radius * ELLIPSE_LIGHT_FLATTENING)
}

/// A light cone shining down from above the center onto an ellipse on the pitch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConeOutline {
	pub apex: DVec2,
	pub base_center: DVec2,
	pub base_radii: DVec2,
}

impl ConeOutline {
	pub fn new(center: DVec2, radius: f64, mode: PerspectiveMode) -> Self {
		Self {
			apex: center - DVec2::Y * radius * CONE_HEIGHT_FACTOR,
			base_center: center,
			base_radii: ellipse_projection(radius, mode),
		}
	}

	/// Apex followed by the left and right edges of the base ellipse.
	pub fn silhouette(&self) -> [DVec2; 3] {
		let half_width = DVec2::X * self.base_radii.x;
		[self.apex, self.base_center - half_width, self.base_center + half_width]
	}
}

/// Control point of the quadratic arc a trajectory follows, raised above the midpoint in proportion to its length.
pub fn trajectory_control_point(start: DVec2, end: DVec2) -> DVec2 {
	let midpoint = start.lerp(end, 0.5);
	midpoint - DVec2::Y * start.distance(end) * TRAJECTORY_ARC_HEIGHT_FACTOR
}

/// Corners of the axis-aligned rectangle spanned by two opposite corners, clockwise from the top left.
pub fn area_corners(first: VideoPosition, second: VideoPosition) -> [VideoPosition; 4] {
	let min = first.min(second);
	let max = first.max(second);
	[min, DVec2::new(max.x, min.y), max, DVec2::new(min.x, max.y)]
}

/// The band of a passing lane around the segment from `start` to `end`. `None` when the segment has no length.
pub fn passing_lane_band(start: DVec2, end: DVec2, half_width: f64) -> Option<[DVec2; 4]> {
	let normal = (end - start).try_normalize()?.perp() * half_width;
	Some([start + normal, end + normal, end - normal, start - normal])
}

/// A horizontal line spanning the full frame width at the height of `anchor`.
pub fn offside_line(anchor: DVec2, frame: FrameSize) -> [DVec2; 2] {
	[DVec2::new(0., anchor.y), DVec2::new(frame.width, anchor.y)]
}
