//! Turns the annotation store, the live tracking feed, and the shape being drawn into a layered [`DrawList`].
//!
//! Rendering is a pure function of its inputs. Stored points stay in video pixel space and are only mapped to display
//! space here, so the perspective mode can change at any time without touching saved data.

use super::utility_types::{DrawList, OverlayContext, OverlayLayer, Pivot, StrokeStyle, ViewOptions};
use crate::consts::*;
use crate::messages::annotations::annotation_store::AnnotationStore;
use crate::messages::tool::utility_types::{DrawingSession, ToolOptions};

use glam::DVec2;
use pitch_geometry::consts::{ARROW_HEAD_LENGTH, DEFAULT_INTENSITY, PASSING_LANE_HALF_WIDTH, PRESSURE_ZONE_RINGS};
use pitch_geometry::geometry::{ConeOutline, area_corners, arrow_head, ellipse_light_radii, ellipse_projection, offside_line, passing_lane_band, radius_of, trajectory_control_point};
use pitch_geometry::{AnnotationType, Color, PlayerPosition, ShapeFamily, Team, VideoPosition, transform_with_mode};

/// The shape being drawn, together with the options it will be committed with.
#[derive(Clone, Copy, Debug)]
pub struct Preview<'a> {
	pub session: &'a DrawingSession,
	pub options: &'a ToolOptions,
}

/// The parts of an annotation, committed or in progress, that affect how it is painted.
struct ShapeView<'a> {
	kind: AnnotationType,
	points: &'a [VideoPosition],
	color: Color,
	measurement: Option<f64>,
	intensity: Option<f64>,
	label: Option<&'a str>,
}

pub fn render(store: &AnnotationStore, live_positions: &[PlayerPosition], view: &ViewOptions, preview: Option<Preview>) -> DrawList {
	if view.frame_size.is_degenerate() {
		return DrawList::default();
	}

	let mut overlay = OverlayContext::new(pitch_geometry::perspective_skew(view.frame_size, view.perspective_mode));

	if view.show_heatmap {
		overlay.set_layer(OverlayLayer::Heatmap);
		draw_heatmap(&mut overlay, live_positions, view);
	}

	if view.show_formation_lines {
		overlay.set_layer(OverlayLayer::Formation);
		draw_formation_lines(&mut overlay, live_positions, view);
	}

	if view.show_player_tracking {
		overlay.set_layer(OverlayLayer::Players);
		draw_players(&mut overlay, live_positions, view);
	}

	overlay.set_layer(OverlayLayer::Annotations);
	for annotation in store.iter() {
		let shape = ShapeView {
			kind: annotation.kind(),
			points: annotation.points(),
			color: annotation.color(),
			measurement: annotation.measurement(),
			intensity: annotation.intensity(),
			label: annotation.label(),
		};
		draw_shape(&mut overlay, &shape, view);
	}

	if let Some(preview) = preview.filter(|preview| preview.session.is_capturing) {
		overlay.set_layer(OverlayLayer::Preview);
		overlay.set_preview(true);
		draw_preview(&mut overlay, preview, view);
	}

	overlay.finish()
}

fn to_display(point: VideoPosition, view: &ViewOptions) -> DVec2 {
	transform_with_mode(point, view.frame_size, view.perspective_mode)
}

fn draw_heatmap(overlay: &mut OverlayContext, players: &[PlayerPosition], view: &ViewOptions) {
	for player in players {
		let Some(heat) = player.heat_intensity else { continue };
		let heat = heat.clamp(0., 1.);
		if heat == 0. {
			continue;
		}

		let center = to_display(player.video_position(view.position_space, view.frame_size), view);
		let radii = ellipse_projection(HEATMAP_BASE_RADIUS * (0.5 + heat), view.perspective_mode);
		let fill = COLOR_HEAT_LOW.lerp(&COLOR_HEAT_HIGH, heat).with_alpha(heat * HEATMAP_MAX_OPACITY);

		overlay.ellipse(center, radii, Some(fill), None);
	}
}

fn team_color(team: Team) -> Color {
	match team {
		Team::Home => COLOR_TEAM_HOME,
		Team::Away => COLOR_TEAM_AWAY,
	}
}

/// Groups one team's players into lines across the pitch: players are ordered along the frame width and a new line starts wherever the gap to the previous player is too wide.
fn formation_lines(players: &[PlayerPosition], team: Team, view: &ViewOptions) -> Vec<Vec<VideoPosition>> {
	let mut positions = players
		.iter()
		.filter(|player| player.team == team)
		.map(|player| player.video_position(view.position_space, view.frame_size))
		.collect::<Vec<_>>();
	positions.sort_by(|a, b| a.x.total_cmp(&b.x));

	let max_gap = view.frame_size.width * FORMATION_LINE_GAP_FACTOR;
	let mut lines: Vec<Vec<VideoPosition>> = Vec::new();
	for position in positions {
		match lines.last_mut() {
			Some(line) if line.last().is_some_and(|previous| position.x - previous.x <= max_gap) => line.push(position),
			_ => lines.push(vec![position]),
		}
	}

	lines.retain(|line| line.len() > 1);
	for line in &mut lines {
		line.sort_by(|a, b| a.y.total_cmp(&b.y));
	}
	lines
}

fn draw_formation_lines(overlay: &mut OverlayContext, players: &[PlayerPosition], view: &ViewOptions) {
	for team in [Team::Home, Team::Away] {
		let stroke = StrokeStyle::dashed(team_color(team).with_alpha(FORMATION_LINE_OPACITY), ANNOTATION_STROKE_WIDTH / 1.5, FORMATION_LINE_DASH);

		for line in formation_lines(players, team, view) {
			let points = line.into_iter().map(|point| to_display(point, view)).collect::<Vec<_>>();
			overlay.polyline(points, stroke);
		}
	}
}

fn draw_players(overlay: &mut OverlayContext, players: &[PlayerPosition], view: &ViewOptions) {
	for player in players {
		let center = to_display(player.video_position(view.position_space, view.frame_size), view);
		let outline = match player.is_correct_position {
			Some(true) => COLOR_POSITION_CORRECT,
			Some(false) => COLOR_POSITION_INCORRECT,
			None => COLOR_POSITION_UNKNOWN,
		};

		overlay.circle(center, PLAYER_MARKER_RADIUS, Some(team_color(player.team)), Some(StrokeStyle::solid(outline, PLAYER_MARKER_OUTLINE_WIDTH)));

		if let Some(jersey_number) = player.jersey_number {
			overlay.text(jersey_number.to_string(), center, COLOR_LABEL_TEXT, None, 0., [Pivot::Middle, Pivot::Middle]);
		}
	}
}

fn draw_preview(overlay: &mut OverlayContext, preview: Preview, view: &ViewOptions) {
	let Preview { session, options } = preview;
	let Some(kind) = session.active_tool.annotation_type() else { return };
	let Some(origin) = session.origin() else { return };
	let color = options.color.unwrap_or_else(|| view.colors.get(kind));

	// An anchor is a whole shape from the first point, other shapes wait for their second
	let complete = kind.family() == ShapeFamily::Anchor || session.captured_points.len() >= kind.point_requirement().max;
	if !complete {
		overlay.circle(to_display(origin, view), PREVIEW_ORIGIN_RADIUS, Some(color), None);
		return;
	}

	let intensity = options.intensity.unwrap_or(view.default_intensity).clamp(0., 1.);
	let shape = ShapeView {
		kind,
		points: &session.captured_points,
		color,
		measurement: None,
		intensity: kind.has_intensity().then_some(intensity),
		label: None,
	};
	draw_shape(overlay, &shape, view);
}

fn glow(color: Color, intensity: Option<f64>) -> Color {
	color.with_alpha(intensity.unwrap_or(DEFAULT_INTENSITY).clamp(0., 1.) * GLOW_MAX_OPACITY)
}

fn draw_shape(overlay: &mut OverlayContext, shape: &ShapeView, view: &ViewOptions) {
	let Some(&first) = shape.points.first() else { return };
	let anchor = to_display(first, view);
	let color = shape.color;
	let stroke = StrokeStyle::solid(color, ANNOTATION_STROKE_WIDTH);
	let fill = color.with_alpha(ANNOTATION_FILL_OPACITY);
	// Both radius points share a y coordinate, so the horizontal offset survives the transform unchanged
	let radius = radius_of(shape.points);
	let mode = view.perspective_mode;
	let end = shape.points.get(1).map(|&point| to_display(point, view));

	match shape.kind {
		AnnotationType::Circle => overlay.ellipse(anchor, ellipse_projection(radius, mode), Some(fill), Some(stroke)),
		AnnotationType::Spotlight => {
			overlay.ellipse(anchor, ellipse_projection(radius, mode), Some(glow(color, shape.intensity)), None);
			overlay.ellipse(anchor, ellipse_projection(radius * SPOTLIGHT_CORE_FRACTION, mode), Some(glow(color, shape.intensity.map(|intensity| intensity * 2.))), None);
		}
		AnnotationType::PressureZone => {
			for (index, (scale, opacity)) in PRESSURE_ZONE_RINGS.into_iter().enumerate() {
				let ring_stroke = (index == 0).then_some(stroke);
				let ring_fill = color.with_alpha(opacity * shape.intensity.unwrap_or(DEFAULT_INTENSITY) / DEFAULT_INTENSITY);
				overlay.ellipse(anchor, ellipse_projection(radius * scale, mode), Some(ring_fill), ring_stroke);
			}
		}
		AnnotationType::EllipseLight => overlay.ellipse(anchor, ellipse_light_radii(radius), Some(glow(color, shape.intensity)), None),
		AnnotationType::Cone => {
			let cone = ConeOutline::new(anchor, radius, mode);
			overlay.polygon(cone.silhouette(), Some(glow(color, shape.intensity)), None);
			overlay.ellipse(cone.base_center, cone.base_radii, Some(glow(color, shape.intensity)), Some(stroke));
		}
		AnnotationType::Line => {
			if let Some(end) = end {
				overlay.line(anchor, end, color, ANNOTATION_STROKE_WIDTH);
			}
		}
		AnnotationType::Arrow => {
			if let Some(end) = end {
				overlay.line(anchor, end, color, ANNOTATION_STROKE_WIDTH);
				overlay.polygon(arrow_head(anchor, end, ARROW_HEAD_LENGTH), Some(color), None);
			}
		}
		AnnotationType::Distance => {
			if let Some(end) = end {
				overlay.dashed_line(anchor, end, color, ANNOTATION_STROKE_WIDTH, DISTANCE_DASH);
				overlay.circle(anchor, DISTANCE_ENDPOINT_RADIUS, Some(color), None);
				overlay.circle(end, DISTANCE_ENDPOINT_RADIUS, Some(color), None);

				if let Some(measurement) = shape.measurement {
					overlay.text(format!("{measurement}m"), anchor.lerp(end, 0.5), COLOR_LABEL_TEXT, Some(COLOR_LABEL_BACKGROUND), LABEL_PADDING, [Pivot::Middle, Pivot::End]);
				}
			}
		}
		AnnotationType::Trajectory => {
			if let Some(end) = end {
				let control = trajectory_control_point(anchor, end);
				overlay.quadratic_curve(anchor, control, end, stroke);
				overlay.polygon(arrow_head(control, end, ARROW_HEAD_LENGTH), Some(color), None);
			}
		}
		AnnotationType::Area => {
			// The corners are transformed individually so the rectangle lies on the pitch
			if let Some(&second) = shape.points.get(1) {
				let corners = area_corners(first, second).map(|corner| to_display(corner, view));
				overlay.polygon(corners, Some(fill), Some(stroke));
			}
		}
		AnnotationType::OffsideLine => {
			let [start, end] = offside_line(anchor, view.frame_size);
			overlay.dashed_line(start, end, color, ANNOTATION_STROKE_WIDTH, OFFSIDE_DASH);
		}
		AnnotationType::PassingLane => {
			if let Some(end) = end {
				if let Some(band) = passing_lane_band(anchor, end, PASSING_LANE_HALF_WIDTH) {
					overlay.polygon(band, Some(fill), None);
				}
				overlay.dashed_line(anchor, end, color, ANNOTATION_STROKE_WIDTH, DISTANCE_DASH);
			}
		}
	}

	if let Some(label) = shape.label {
		overlay.text(label, anchor - DVec2::Y * LABEL_OFFSET, COLOR_LABEL_TEXT, Some(COLOR_LABEL_BACKGROUND), LABEL_PADDING, [Pivot::Middle, Pivot::End]);
	}
}

#[cfg(test)]
mod test_renderer {
	use super::*;
	use crate::messages::overlays::utility_types::DrawCommand;
	use crate::messages::preferences::utility_types::Preferences;
	use crate::messages::tool::utility_types::ToolType;
	use crate::test_utils::sample_annotation;

	static NO_OPTIONS: ToolOptions = ToolOptions {
		color: None,
		label: None,
		intensity: None,
	};

	fn preview(session: &DrawingSession) -> Option<Preview<'_>> {
		Some(Preview { session, options: &NO_OPTIONS })
	}

	use glam::DAffine2;
	use pitch_geometry::{AnnotationId, ColorTable, CommitOptions, FrameSize, PerspectiveMode, build_annotation};
	use pretty_assertions::assert_eq;

	const FRAME: FrameSize = FrameSize::new(1000., 500.);

	fn flat_view() -> ViewOptions {
		let mut view = ViewOptions::new(FRAME, &Preferences::default());
		view.perspective_mode = PerspectiveMode::Flat;
		view
	}

	fn player(id: &str, x: f64, y: f64, team: Team) -> PlayerPosition {
		let mut player = PlayerPosition::new(id, DVec2::new(x, y), team);
		player.heat_intensity = Some(0.5);
		player.jersey_number = Some(7);
		player
	}

	fn texts(draw_list: &DrawList) -> Vec<String> {
		draw_list
			.items
			.iter()
			.filter_map(|item| match &item.command {
				DrawCommand::Text { text, .. } => Some(text.clone()),
				_ => None,
			})
			.collect()
	}

	#[test]
	fn degenerate_frame_draws_nothing() {
		let mut store = AnnotationStore::default();
		store.add(sample_annotation(1, AnnotationType::Circle));
		let view = ViewOptions::new(FrameSize::new(0., 0.), &Preferences::default());

		let draw_list = render(&store, &[player("a", 0.5, 0.5, Team::Home)], &view, None);
		assert!(draw_list.is_empty());
		assert_eq!(draw_list.paint_transform, DAffine2::IDENTITY);
	}

	#[test]
	fn layers_are_painted_back_to_front() {
		let mut store = AnnotationStore::default();
		store.add(sample_annotation(1, AnnotationType::Arrow));
		let players = [player("a", 0.2, 0.3, Team::Home), player("b", 0.22, 0.6, Team::Home), player("c", 0.7, 0.5, Team::Away)];
		let session = DrawingSession {
			active_tool: ToolType::Annotate(AnnotationType::Line),
			captured_points: vec![DVec2::new(10., 10.), DVec2::new(90., 40.)],
			is_capturing: true,
		};
		let mut view = ViewOptions::new(FRAME, &Preferences::default());
		view.show_heatmap = true;
		view.show_formation_lines = true;

		let draw_list = render(&store, &players, &view, preview(&session));
		let layers = draw_list.items.iter().map(|item| item.layer).collect::<Vec<_>>();

		assert!(layers.windows(2).all(|pair| pair[0] <= pair[1]));
		for layer in [OverlayLayer::Heatmap, OverlayLayer::Formation, OverlayLayer::Players, OverlayLayer::Annotations, OverlayLayer::Preview] {
			assert!(layers.contains(&layer), "Missing {layer:?}");
		}
	}

	#[test]
	fn hidden_layers_are_skipped() {
		let mut view = flat_view();
		view.show_player_tracking = false;

		let draw_list = render(&AnnotationStore::default(), &[player("a", 0.5, 0.5, Team::Away)], &view, None);
		assert!(draw_list.is_empty());
	}

	#[test]
	fn distance_is_labelled_in_meters() {
		let distance = build_annotation(
			AnnotationType::Distance,
			vec![DVec2::new(100., 100.), DVec2::new(200., 100.)],
			FRAME,
			&ColorTable::DEFAULT,
			AnnotationId(1),
			CommitOptions::default(),
		)
		.unwrap();
		let mut store = AnnotationStore::default();
		store.add(distance);

		let draw_list = render(&store, &[], &flat_view(), None);
		assert_eq!(texts(&draw_list), vec!["10m".to_string()]);

		let label_position = draw_list.items.iter().find_map(|item| match &item.command {
			DrawCommand::Text { position, .. } => Some(*position),
			_ => None,
		});
		assert_eq!(label_position, Some(DVec2::new(150., 100.)));
	}

	#[test]
	fn preview_never_shows_a_measurement() {
		let session = DrawingSession {
			active_tool: ToolType::Annotate(AnnotationType::Distance),
			captured_points: vec![DVec2::new(100., 100.), DVec2::new(200., 100.)],
			is_capturing: true,
		};

		let draw_list = render(&AnnotationStore::default(), &[], &flat_view(), preview(&session));
		assert!(texts(&draw_list).is_empty());
		assert!(!draw_list.is_empty());
		assert!(draw_list.items.iter().all(|item| item.pulsing && item.layer == OverlayLayer::Preview));
	}

	#[test]
	fn partial_preview_marks_the_origin() {
		let session = DrawingSession {
			active_tool: ToolType::Annotate(AnnotationType::Arrow),
			captured_points: vec![DVec2::new(30., 40.)],
			is_capturing: true,
		};

		let draw_list = render(&AnnotationStore::default(), &[], &flat_view(), preview(&session));
		assert_eq!(draw_list.items.len(), 1);
		assert!(matches!(draw_list.items[0].command, DrawCommand::Ellipse { center, .. } if center == DVec2::new(30., 40.)));
	}

	#[test]
	fn offside_line_spans_the_frame() {
		let mut store = AnnotationStore::default();
		store.add(sample_annotation(1, AnnotationType::OffsideLine));

		let draw_list = render(&store, &[], &ViewOptions::new(FRAME, &Preferences::default()), None);
		let DrawCommand::Line { start, end, stroke } = &draw_list.items[0].command else {
			panic!("Expected a line");
		};
		assert_eq!((start.x, end.x), (0., FRAME.width));
		assert_eq!(start.y, end.y);
		assert!(stroke.dash.is_some());
	}

	#[test]
	fn every_annotation_type_renders() {
		for kind in AnnotationType::ALL {
			let mut store = AnnotationStore::default();
			store.add(sample_annotation(1, kind));

			let draw_list = render(&store, &[], &ViewOptions::new(FRAME, &Preferences::default()), None);
			assert!(!draw_list.is_empty(), "{kind} drew nothing");
		}
	}

	#[test]
	fn perspective_mode_controls_the_paint_transform() {
		let store = AnnotationStore::default();
		assert_eq!(render(&store, &[], &flat_view(), None).paint_transform, DAffine2::IDENTITY);
		assert_ne!(render(&store, &[], &ViewOptions::new(FRAME, &Preferences::default()), None).paint_transform, DAffine2::IDENTITY);
	}

	#[test]
	fn formation_lines_group_by_depth() {
		let players = [
			player("gk", 0.05, 0.5, Team::Home),
			player("lb", 0.25, 0.8, Team::Home),
			player("cb", 0.24, 0.4, Team::Home),
			player("rb", 0.26, 0.1, Team::Home),
			player("st", 0.6, 0.5, Team::Home),
			player("opponent", 0.25, 0.6, Team::Away),
		];

		let lines = formation_lines(&players, Team::Home, &flat_view());
		assert_eq!(lines.len(), 1);
		let ys = lines[0].iter().map(|point| point.y).collect::<Vec<_>>();
		assert_eq!(ys, vec![50., 200., 400.]);
	}

	#[test]
	fn player_markers_show_team_and_position_correctness() {
		let marker = |id: &str, team: Team, correct: Option<bool>| {
			let mut player = PlayerPosition::new(id, DVec2::new(0.1 + id.len() as f64 * 0.1, 0.5), team);
			player.jersey_number = Some(id.len() as u32);
			player.is_correct_position = correct;
			player
		};
		let players = [
			marker("h", Team::Home, Some(true)),
			marker("hh", Team::Home, Some(false)),
			marker("hhh", Team::Home, None),
			marker("aaaa", Team::Away, Some(true)),
			marker("aaaaa", Team::Away, Some(false)),
			marker("aaaaaa", Team::Away, None),
		];

		let draw_list = render(&AnnotationStore::default(), &players, &flat_view(), None);
		let markers = draw_list
			.layer(OverlayLayer::Players)
			.filter_map(|item| match &item.command {
				DrawCommand::Ellipse { fill, stroke, .. } => Some((*fill, stroke.map(|stroke| stroke.color))),
				_ => None,
			})
			.collect::<Vec<_>>();

		assert_eq!(
			markers,
			vec![
				(Some(COLOR_TEAM_HOME), Some(COLOR_POSITION_CORRECT)),
				(Some(COLOR_TEAM_HOME), Some(COLOR_POSITION_INCORRECT)),
				(Some(COLOR_TEAM_HOME), Some(COLOR_POSITION_UNKNOWN)),
				(Some(COLOR_TEAM_AWAY), Some(COLOR_POSITION_CORRECT)),
				(Some(COLOR_TEAM_AWAY), Some(COLOR_POSITION_INCORRECT)),
				(Some(COLOR_TEAM_AWAY), Some(COLOR_POSITION_UNKNOWN)),
			]
		);
		assert_eq!(texts(&draw_list), ["1", "2", "3", "4", "5", "6"].map(String::from).to_vec());
	}

	#[test]
	fn preview_uses_the_options_it_will_commit_with() {
		let points = vec![DVec2::new(400., 250.), DVec2::new(460., 250.)];
		let options = ToolOptions {
			color: Some(Color::BLACK),
			label: None,
			intensity: Some(0.3),
		};
		let session = DrawingSession {
			active_tool: ToolType::Annotate(AnnotationType::Spotlight),
			captured_points: points.clone(),
			is_capturing: true,
		};
		let commit_options = CommitOptions {
			color: options.color,
			intensity: options.intensity,
			..Default::default()
		};
		let mut store = AnnotationStore::default();
		store.add(build_annotation(AnnotationType::Spotlight, points, FRAME, &ColorTable::DEFAULT, AnnotationId(1), commit_options).unwrap());

		let draw_list = render(&store, &[], &flat_view(), Some(Preview { session: &session, options: &options }));
		let fills = |layer| {
			draw_list
				.layer(layer)
				.filter_map(|item| match &item.command {
					DrawCommand::Ellipse { fill, .. } => *fill,
					_ => None,
				})
				.collect::<Vec<_>>()
		};

		let committed = fills(OverlayLayer::Annotations);
		assert_eq!(committed.len(), 2);
		assert_eq!(fills(OverlayLayer::Preview), committed.iter().map(|fill| fill.fade(PREVIEW_OPACITY)).collect::<Vec<_>>());
	}

	#[test]
	fn offside_preview_is_drawn_from_the_anchor() {
		let session = DrawingSession {
			active_tool: ToolType::Annotate(AnnotationType::OffsideLine),
			captured_points: vec![DVec2::new(300., 120.)],
			is_capturing: true,
		};

		let draw_list = render(&AnnotationStore::default(), &[], &flat_view(), preview(&session));
		assert!(matches!(draw_list.items[0].command, DrawCommand::Line { start, end, .. } if start == DVec2::new(0., 120.) && end == DVec2::new(FRAME.width, 120.)));
	}
}
