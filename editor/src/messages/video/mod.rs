mod video_message;
mod video_message_handler;

pub mod utility_types;

#[doc(inline)]
pub use video_message::VideoMessage;
#[doc(inline)]
pub use video_message_handler::VideoMessageHandler;
