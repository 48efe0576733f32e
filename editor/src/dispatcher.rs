use crate::messages::preferences::utility_types::MessageLoggingVerbosity;
use crate::messages::prelude::*;

#[derive(Debug, Default)]
pub struct Dispatcher {
	message_queues: Vec<VecDeque<Message>>,
	pub responses: Vec<FrontendMessage>,
	pub message_handlers: DispatcherMessageHandlers,
}

#[derive(Debug, Default)]
pub struct DispatcherMessageHandlers {
	pub annotations_message_handler: AnnotationsMessageHandler,
	pub overlays_message_handler: OverlaysMessageHandler,
	pub preferences_message_handler: PreferencesMessageHandler,
	pub tool_message_handler: ToolMessageHandler,
	pub video_message_handler: VideoMessageHandler,
}

/// For optimization, these are messages guaranteed to be redundant when repeated.
/// The last occurrence of the message in the message queue is sufficient to ensure correct behavior.
/// In addition, these messages do not change any state in the backend.
fn is_side_effect_free(message: &Message) -> bool {
	matches!(message, Message::Overlays(OverlaysMessage::Draw))
}

const DEBUG_MESSAGE_ENDING_BLOCK_LIST: &[&str] = &["PointerMove", "Draw", "TimeUpdate", "RenderOverlays"];

impl Dispatcher {
	pub fn new() -> Self {
		Self::default()
	}

	// If the deepest queues (higher index in queues list) are now empty (after being popped from) then remove them
	fn cleanup_queues(&mut self, leave_last: bool) {
		while self.message_queues.last().filter(|queue| queue.is_empty()).is_some() {
			if leave_last && self.message_queues.len() == 1 {
				break;
			}
			self.message_queues.pop();
		}
	}

	pub fn handle_message<T: Into<Message>>(&mut self, message: T) {
		self.message_queues.push(VecDeque::from([message.into()]));

		while let Some(message) = self.message_queues.last_mut().and_then(VecDeque::pop_front) {
			let verbosity = self.message_handlers.preferences_message_handler.preferences().message_logging_verbosity;

			// Skip processing of this message if it will be processed later (at the end of the shallowest level queue)
			if is_side_effect_free(&message) {
				let already_in_queue = self.message_queues.first().filter(|queue| queue.contains(&message)).is_some();
				if already_in_queue {
					self.log_deferred_message(&message, &self.message_queues, verbosity);
					self.cleanup_queues(false);
					continue;
				} else if self.message_queues.len() > 1 {
					self.log_deferred_message(&message, &self.message_queues, verbosity);
					self.cleanup_queues(true);
					self.message_queues[0].add(message);
					continue;
				}
			}

			self.log_message(&message, &self.message_queues, verbosity);

			// Create a new queue for the child messages
			let mut queue = VecDeque::new();

			// Process the action by forwarding it to the relevant message handler, or saving the FrontendMessage to be sent to the frontend
			let handlers = &mut self.message_handlers;
			match message {
				Message::NoOp => {}
				Message::Annotations(message) => {
					handlers.annotations_message_handler.process_message(message, &mut queue, ());
				}
				Message::Frontend(message) => {
					// `FrontendMessage`s are saved and will be sent to the frontend after the message queue is done being processed
					self.responses.push(message);
				}
				Message::Overlays(message) => {
					let context = OverlaysMessageContext {
						store: handlers.annotations_message_handler.store(),
						session: handlers.tool_message_handler.session(),
						tool_options: handlers.tool_message_handler.options(),
						video: handlers.video_message_handler.state(),
						preferences: handlers.preferences_message_handler.preferences(),
					};
					handlers.overlays_message_handler.process_message(message, &mut queue, context);
				}
				Message::Preferences(message) => {
					handlers.preferences_message_handler.process_message(message, &mut queue, ());
				}
				Message::Tool(message) => {
					let context = ToolMessageContext {
						video: handlers.video_message_handler.state(),
						preferences: handlers.preferences_message_handler.preferences(),
					};
					handlers.tool_message_handler.process_message(message, &mut queue, context);
				}
				Message::Video(message) => {
					handlers.video_message_handler.process_message(message, &mut queue, ());
				}
			}

			// If there are child messages, append the queue to the list of queues
			if !queue.is_empty() {
				self.message_queues.push(queue);
			}

			self.cleanup_queues(false);
		}
	}

	/// Create the tree structure for logging the messages as a tree
	fn create_indents(queues: &[VecDeque<Message>]) -> String {
		String::from_iter(queues.iter().enumerate().skip(1).map(|(index, queue)| {
			if index == queues.len() - 1 {
				if queue.is_empty() { "└── " } else { "├── " }
			} else if queue.is_empty() {
				"   "
			} else {
				"│    "
			}
		}))
	}

	/// Logs a message that is about to be executed, either as a tree of names or with the entire payload (depending on settings)
	fn log_message(&self, message: &Message, queues: &[VecDeque<Message>], message_logging_verbosity: MessageLoggingVerbosity) {
		let name = message.name();
		if DEBUG_MESSAGE_ENDING_BLOCK_LIST.iter().any(|blocked_name| name.ends_with(blocked_name)) {
			return;
		}

		match message_logging_verbosity {
			MessageLoggingVerbosity::Off => log::trace!("{name}"),
			MessageLoggingVerbosity::Names => log::info!("{}{name}", Self::create_indents(queues)),
			MessageLoggingVerbosity::Contents => log::info!("Message: {}{message:?}", Self::create_indents(queues)),
		}
	}

	/// Logs into the tree that the message is side effect free and its execution will be deferred
	fn log_deferred_message(&self, message: &Message, queues: &[VecDeque<Message>], message_logging_verbosity: MessageLoggingVerbosity) {
		if let MessageLoggingVerbosity::Names = message_logging_verbosity {
			log::info!("{}Deferred \"{}\" because it is side effect free", Self::create_indents(queues), message.name());
		}
	}
}

#[cfg(test)]
mod test {
	use crate::messages::prelude::*;
	use crate::test_utils::EditorTestUtils;

	use glam::DVec2;
	use pitch_geometry::AnnotationType;

	fn render_count(responses: &[FrontendMessage]) -> usize {
		responses.iter().filter(|response| matches!(response, FrontendMessage::RenderOverlays { .. })).count()
	}

	#[test]
	fn redraws_are_coalesced() {
		let mut editor = EditorTestUtils::with_video(1000., 500.);
		editor.select_tool(AnnotationType::Line);
		editor.pointer_down(DVec2::new(10., 10.));
		editor.pointer_move(DVec2::new(40., 40.));

		// Committing requests a redraw from both the tool and the store
		let responses = editor.handle_message(ToolMessage::PointerUp);
		assert_eq!(render_count(&responses), 1);
		assert_eq!(editor.annotations().len(), 1);
	}

	#[test]
	fn frontend_messages_are_returned_in_order() {
		let mut editor = EditorTestUtils::create();
		let responses = editor.handle_message(ToolMessage::SetDrawingMode { enabled: true });

		assert_eq!(responses[0], FrontendMessage::UpdateDrawingMode { enabled: true });
		assert_eq!(responses[1], FrontendMessage::UpdateMouseCursor { cursor: MouseCursorIcon::Default });
	}

	#[test]
	fn no_op_produces_nothing() {
		let mut editor = EditorTestUtils::create();
		assert!(editor.handle_message(Message::NoOp).is_empty());
	}
}
