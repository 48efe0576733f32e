mod overlays_message;
mod overlays_message_handler;

pub mod renderer;
pub mod utility_types;

#[doc(inline)]
pub use overlays_message::OverlaysMessage;
#[doc(inline)]
pub use overlays_message_handler::{OverlaysMessageContext, OverlaysMessageHandler};
