mod preferences_message;
mod preferences_message_handler;

pub mod utility_types;

#[doc(inline)]
pub use preferences_message::PreferencesMessage;
#[doc(inline)]
pub use preferences_message_handler::PreferencesMessageHandler;
