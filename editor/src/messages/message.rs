use crate::messages::prelude::*;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Message {
	NoOp,

	Annotations(AnnotationsMessage),
	Frontend(FrontendMessage),
	Overlays(OverlaysMessage),
	Preferences(PreferencesMessage),
	Tool(ToolMessage),
	Video(VideoMessage),
}

macro_rules! child_message {
	($($variant:ident($child:ty)),* $(,)?) => {
		$(
			impl From<$child> for Message {
				fn from(message: $child) -> Self {
					Message::$variant(message)
				}
			}
		)*
	};
}

child_message!(
	Annotations(AnnotationsMessage),
	Frontend(FrontendMessage),
	Overlays(OverlaysMessage),
	Preferences(PreferencesMessage),
	Tool(ToolMessage),
	Video(VideoMessage),
);

impl Message {
	/// Path of variant names, like `Tool.PointerMove`, used for message logging.
	pub fn name(&self) -> String {
		let (parent, child) = match self {
			Message::NoOp => return "NoOp".into(),
			Message::Annotations(message) => ("Annotations", message.local_name()),
			Message::Frontend(message) => ("Frontend", message.local_name()),
			Message::Overlays(message) => ("Overlays", message.local_name()),
			Message::Preferences(message) => ("Preferences", message.local_name()),
			Message::Tool(message) => ("Tool", message.local_name()),
			Message::Video(message) => ("Video", message.local_name()),
		};
		format!("{parent}.{child}")
	}
}
