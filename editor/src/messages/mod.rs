//! The message tree: every state change in the editor is a message routed by the dispatcher to the handler that owns that state.

pub mod annotations;
pub mod frontend;
pub mod message;
pub mod overlays;
pub mod preferences;
pub mod tool;
pub mod video;

pub mod prelude {
	pub use crate::utility_traits::{MessageHandler, Responses};

	pub use crate::messages::annotations::{AnnotationsMessage, AnnotationsMessageHandler};
	pub use crate::messages::frontend::{FrontendMessage, MouseCursorIcon};
	pub use crate::messages::message::Message;
	pub use crate::messages::overlays::{OverlaysMessage, OverlaysMessageContext, OverlaysMessageHandler};
	pub use crate::messages::preferences::{PreferencesMessage, PreferencesMessageHandler};
	pub use crate::messages::tool::{ToolMessage, ToolMessageContext, ToolMessageHandler};
	pub use crate::messages::video::{VideoMessage, VideoMessageHandler};

	pub use std::collections::VecDeque;
}
