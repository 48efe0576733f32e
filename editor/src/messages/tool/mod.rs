mod tool_message;
mod tool_message_handler;

pub mod drawing_tool;
pub mod utility_types;

#[doc(inline)]
pub use tool_message::{ToolMessage, ToolOptionsUpdate};
#[doc(inline)]
pub use tool_message_handler::{ToolMessageContext, ToolMessageHandler};
