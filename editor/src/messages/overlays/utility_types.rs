use crate::consts::{PREVIEW_DASH, PREVIEW_OPACITY};
use crate::messages::preferences::utility_types::Preferences;

use glam::{DAffine2, DVec2};
use pitch_geometry::{Color, ColorTable, FrameSize, PerspectiveMode, PositionSpace};
use serde::{Deserialize, Serialize};

/// Stacking order of the overlay, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OverlayLayer {
	Heatmap,
	Formation,
	Players,
	Annotations,
	Preview,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
	pub dash: f64,
	pub gap: f64,
	pub offset: f64,
}

impl DashPattern {
	pub fn new([dash, gap]: [f64; 2]) -> Self {
		Self { dash, gap, offset: 0. }
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
	pub color: Color,
	pub width: f64,
	pub dash: Option<DashPattern>,
}

impl StrokeStyle {
	pub fn solid(color: Color, width: f64) -> Self {
		Self { color, width, dash: None }
	}

	pub fn dashed(color: Color, width: f64, dash: [f64; 2]) -> Self {
		Self {
			color,
			width,
			dash: Some(DashPattern::new(dash)),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pivot {
	Start,
	Middle,
	End,
}

/// A primitive for the rendering surface, in display pixels before the paint transform is applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
	Ellipse {
		center: DVec2,
		radii: DVec2,
		fill: Option<Color>,
		stroke: Option<StrokeStyle>,
	},
	Line {
		start: DVec2,
		end: DVec2,
		stroke: StrokeStyle,
	},
	Polygon {
		points: Vec<DVec2>,
		closed: bool,
		fill: Option<Color>,
		stroke: Option<StrokeStyle>,
	},
	QuadraticCurve {
		start: DVec2,
		control: DVec2,
		end: DVec2,
		stroke: StrokeStyle,
	},
	Text {
		position: DVec2,
		text: String,
		color: Color,
		background: Option<Color>,
		/// Horizontal then vertical anchoring of the text box relative to `position`.
		pivot: [Pivot; 2],
		padding: f64,
	},
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawItem {
	pub layer: OverlayLayer,
	pub command: DrawCommand,
	/// Animated by the surface to mark a shape that is still being drawn.
	pub pulsing: bool,
}

/// Everything the rendering surface paints for one frame of the overlay, already in paint order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
	/// Applied by the surface to every item, for the perspective skew.
	pub paint_transform: DAffine2,
	pub items: Vec<DrawItem>,
}

impl DrawList {
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn layer(&self, layer: OverlayLayer) -> impl Iterator<Item = &DrawItem> {
		self.items.iter().filter(move |item| item.layer == layer)
	}
}

/// Accumulates draw commands into a [`DrawList`], tagging each with the current layer.
/// In preview mode every color is faded and every stroke is dashed.
pub struct OverlayContext {
	paint_transform: DAffine2,
	layer: OverlayLayer,
	preview: bool,
	items: Vec<DrawItem>,
}

impl OverlayContext {
	pub fn new(paint_transform: DAffine2) -> Self {
		Self {
			paint_transform,
			layer: OverlayLayer::Heatmap,
			preview: false,
			items: Vec::new(),
		}
	}

	pub fn set_layer(&mut self, layer: OverlayLayer) {
		self.layer = layer;
	}

	pub fn set_preview(&mut self, preview: bool) {
		self.preview = preview;
	}

	pub fn line(&mut self, start: DVec2, end: DVec2, color: Color, width: f64) {
		self.push(DrawCommand::Line {
			start,
			end,
			stroke: self.stroke(StrokeStyle::solid(color, width)),
		});
	}

	pub fn dashed_line(&mut self, start: DVec2, end: DVec2, color: Color, width: f64, dash: [f64; 2]) {
		self.push(DrawCommand::Line {
			start,
			end,
			stroke: self.stroke(StrokeStyle::dashed(color, width, dash)),
		});
	}

	pub fn circle(&mut self, center: DVec2, radius: f64, fill: Option<Color>, stroke: Option<StrokeStyle>) {
		self.ellipse(center, DVec2::splat(radius), fill, stroke);
	}

	pub fn ellipse(&mut self, center: DVec2, radii: DVec2, fill: Option<Color>, stroke: Option<StrokeStyle>) {
		self.push(DrawCommand::Ellipse {
			center,
			radii,
			fill: fill.map(|fill| self.fill(fill)),
			stroke: stroke.map(|stroke| self.stroke(stroke)),
		});
	}

	pub fn polygon(&mut self, points: impl Into<Vec<DVec2>>, fill: Option<Color>, stroke: Option<StrokeStyle>) {
		self.push(DrawCommand::Polygon {
			points: points.into(),
			closed: true,
			fill: fill.map(|fill| self.fill(fill)),
			stroke: stroke.map(|stroke| self.stroke(stroke)),
		});
	}

	pub fn polyline(&mut self, points: impl Into<Vec<DVec2>>, stroke: StrokeStyle) {
		self.push(DrawCommand::Polygon {
			points: points.into(),
			closed: false,
			fill: None,
			stroke: Some(self.stroke(stroke)),
		});
	}

	pub fn quadratic_curve(&mut self, start: DVec2, control: DVec2, end: DVec2, stroke: StrokeStyle) {
		self.push(DrawCommand::QuadraticCurve {
			start,
			control,
			end,
			stroke: self.stroke(stroke),
		});
	}

	pub fn text(&mut self, text: impl Into<String>, position: DVec2, color: Color, background: Option<Color>, padding: f64, pivot: [Pivot; 2]) {
		self.push(DrawCommand::Text {
			position,
			text: text.into(),
			color: self.fill(color),
			background: background.map(|background| self.fill(background)),
			pivot,
			padding,
		});
	}

	pub fn finish(self) -> DrawList {
		DrawList {
			paint_transform: self.paint_transform,
			items: self.items,
		}
	}

	fn push(&mut self, command: DrawCommand) {
		self.items.push(DrawItem {
			layer: self.layer,
			command,
			pulsing: self.preview,
		});
	}

	fn fill(&self, color: Color) -> Color {
		if self.preview { color.fade(PREVIEW_OPACITY) } else { color }
	}

	fn stroke(&self, stroke: StrokeStyle) -> StrokeStyle {
		if !self.preview {
			return stroke;
		}

		StrokeStyle {
			color: stroke.color.fade(PREVIEW_OPACITY),
			width: stroke.width,
			dash: stroke.dash.or(Some(DashPattern::new(PREVIEW_DASH))),
		}
	}
}

/// The display settings the renderer needs, gathered from the video and the preferences.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewOptions {
	pub frame_size: FrameSize,
	pub perspective_mode: PerspectiveMode,
	pub position_space: PositionSpace,
	pub show_heatmap: bool,
	pub show_player_tracking: bool,
	pub show_formation_lines: bool,
	pub colors: ColorTable,
	/// Intensity a glow or zone shape is drawn with when the tool options leave it unset.
	pub default_intensity: f64,
}

impl ViewOptions {
	pub fn new(frame_size: FrameSize, preferences: &Preferences) -> Self {
		Self {
			frame_size,
			perspective_mode: preferences.perspective_mode,
			position_space: preferences.position_space,
			show_heatmap: preferences.show_heatmap,
			show_player_tracking: preferences.show_player_tracking,
			show_formation_lines: preferences.show_formation_lines,
			colors: preferences.color_table(),
			default_intensity: preferences.default_intensity,
		}
	}
}
