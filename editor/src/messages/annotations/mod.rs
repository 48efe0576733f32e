mod annotations_message;
mod annotations_message_handler;

pub mod annotation_store;

#[doc(inline)]
pub use annotations_message::AnnotationsMessage;
#[doc(inline)]
pub use annotations_message_handler::AnnotationsMessageHandler;
