use super::annotation_store::AnnotationStore;
use crate::messages::prelude::*;
use crate::persistence::AnalysisBundle;

#[derive(Debug, Default)]
pub struct AnnotationsMessageHandler {
	store: AnnotationStore,
}

impl MessageHandler<AnnotationsMessage, ()> for AnnotationsMessageHandler {
	fn process_message(&mut self, message: AnnotationsMessage, responses: &mut VecDeque<Message>, _data: ()) {
		match message {
			AnnotationsMessage::Add { annotation } => {
				log::trace!("Committed {} annotation {}", annotation.kind(), annotation.id());
				self.store.add(annotation);
				self.changed(responses);
			}
			AnnotationsMessage::ClearAll => {
				self.store.clear_all();
				self.changed(responses);
			}
			AnnotationsMessage::Export { video_url } => {
				let bundle = AnalysisBundle::new(video_url, chrono::Utc::now(), self.store.snapshot());

				match bundle.to_json() {
					Ok(document) => responses.add(FrontendMessage::TriggerFileDownload { document, name: bundle.file_name() }),
					Err(error) => {
						log::warn!("Could not export analysis: {error}");
						responses.add(FrontendMessage::DisplayDialogError {
							title: "Export failed".into(),
							description: error.to_string(),
						});
					}
				}
			}
			AnnotationsMessage::ReplaceAll { annotations } => {
				self.store.replace_all(annotations);
				self.changed(responses);
			}
		}
	}
}

impl AnnotationsMessageHandler {
	pub fn store(&self) -> &AnnotationStore {
		&self.store
	}

	fn changed(&self, responses: &mut VecDeque<Message>) {
		responses.add(FrontendMessage::UpdateAnnotationCount { count: self.store.len() });
		responses.add(OverlaysMessage::Draw);
	}
}

#[cfg(test)]
mod test_annotations_message_handler {
	use crate::messages::prelude::*;
	use crate::persistence::AnalysisBundle;
	use crate::test_utils::{EditorTestUtils, sample_annotation};

	use pitch_geometry::{AnnotationType, ColorTable};
	use pretty_assertions::assert_eq;

	#[test]
	fn mutations_report_the_count() {
		let mut editor = EditorTestUtils::create();
		let responses = editor.handle_message(AnnotationsMessage::Add {
			annotation: sample_annotation(1, AnnotationType::Line),
		});
		assert!(responses.contains(&FrontendMessage::UpdateAnnotationCount { count: 1 }));

		let responses = editor.handle_message(AnnotationsMessage::ClearAll);
		assert!(responses.contains(&FrontendMessage::UpdateAnnotationCount { count: 0 }));
	}

	#[test]
	fn export_triggers_a_dated_download() {
		let mut editor = EditorTestUtils::create();
		editor.handle_message(AnnotationsMessage::Add {
			annotation: sample_annotation(4, AnnotationType::Trajectory),
		});

		let responses = editor.handle_message(AnnotationsMessage::Export {
			video_url: "https://example.com/match.mp4".into(),
		});
		let Some(FrontendMessage::TriggerFileDownload { document, name }) = responses.into_iter().find(|response| matches!(response, FrontendMessage::TriggerFileDownload { .. })) else {
			panic!("Export did not trigger a download");
		};

		assert!(name.starts_with("match-analysis-"));
		assert!(name.ends_with(".json"));

		let imported = AnalysisBundle::from_json(&document, &ColorTable::DEFAULT).unwrap();
		assert_eq!(imported.bundle.video_url, "https://example.com/match.mp4");
		assert_eq!(imported.bundle.annotations, vec![sample_annotation(4, AnnotationType::Trajectory)]);
		assert_eq!(imported.skipped, 0);
	}
}
