use crate::application::{Editor, set_uuid_seed};
use crate::messages::prelude::*;
use crate::messages::tool::ToolOptionsUpdate;
use crate::messages::tool::utility_types::{DrawingSession, ToolType};
use crate::messages::video::utility_types::VideoState;

use glam::DVec2;
use pitch_geometry::{Annotation, AnnotationId, AnnotationType, Color, ColorTable, CommitOptions, FrameSize, ShapeFamily, build_annotation};

/// A set of utility functions to make the writing of editor test more declarative
pub struct EditorTestUtils {
	pub editor: Editor,
}

impl EditorTestUtils {
	pub fn create() -> Self {
		let _ = env_logger::builder().is_test(true).try_init();
		set_uuid_seed(0);

		Self { editor: Editor::new() }
	}

	/// An editor whose video metadata has loaded with the given frame size.
	pub fn with_video(width: f64, height: f64) -> Self {
		let mut editor = Self::create();
		editor.handle_message(VideoMessage::MetadataLoaded { width, height, duration: 90. * 60. });
		editor
	}

	pub fn handle_message(&mut self, message: impl Into<Message>) -> Vec<FrontendMessage> {
		self.editor.handle_message(message)
	}

	pub fn annotations(&self) -> &[Annotation] {
		self.editor.annotations()
	}

	pub fn session(&self) -> &DrawingSession {
		self.editor.session()
	}

	pub fn video(&self) -> &VideoState {
		self.editor.video()
	}

	pub fn activate(&mut self, tool_type: ToolType) {
		self.handle_message(ToolMessage::ActivateTool { tool_type });
	}

	/// Activates the annotation tool for `kind` and turns on drawing mode.
	pub fn select_tool(&mut self, kind: AnnotationType) {
		self.activate(ToolType::Annotate(kind));
		self.set_drawing_mode(true);
	}

	pub fn set_drawing_mode(&mut self, enabled: bool) {
		self.handle_message(ToolMessage::SetDrawingMode { enabled });
	}

	pub fn set_label(&mut self, label: Option<String>) {
		self.handle_message(ToolMessage::UpdateOptions(ToolOptionsUpdate::Label(label)));
	}

	pub fn set_color(&mut self, color: Option<Color>) {
		self.handle_message(ToolMessage::UpdateOptions(ToolOptionsUpdate::Color(color)));
	}

	pub fn time_update(&mut self, current_time: f64) {
		self.handle_message(VideoMessage::TimeUpdate { current_time });
	}

	pub fn pointer_down(&mut self, position: DVec2) {
		self.handle_message(ToolMessage::PointerDown { position });
	}

	pub fn pointer_move(&mut self, position: DVec2) {
		self.handle_message(ToolMessage::PointerMove { position });
	}

	pub fn pointer_up(&mut self) {
		self.handle_message(ToolMessage::PointerUp);
	}

	pub fn drag(&mut self, start: DVec2, end: DVec2) {
		self.pointer_down(start);
		self.pointer_move(start.lerp(end, 0.5));
		self.pointer_move(end);
		self.pointer_up();
	}
}

/// A committed annotation of `kind` with a fixed id and plausible points on a 1000x500 frame.
pub fn sample_annotation(id: u64, kind: AnnotationType) -> Annotation {
	let points = match kind.family() {
		ShapeFamily::Radius => vec![DVec2::new(400., 250.), DVec2::new(440., 250.)],
		ShapeFamily::TwoEndpoint => vec![DVec2::new(100., 100.), DVec2::new(200., 150.)],
		ShapeFamily::Anchor => vec![DVec2::new(300., 200.)],
	};

	build_annotation(kind, points, FrameSize::new(1000., 500.), &ColorTable::DEFAULT, AnnotationId(id), CommitOptions::default()).expect("sample points fit every annotation type")
}
