use crate::messages::prelude::*;

/// Implements a message handler struct for a separate message enum.
/// - The first generic argument (`M`) is that message enum type, representing a message to be matched and handled in `process_message()`.
/// - The second generic argument (`D`) is the type of data that can be passed along by the caller to `process_message()`.
pub trait MessageHandler<M, D> {
	fn process_message(&mut self, message: M, responses: &mut VecDeque<Message>, data: D);
}

/// Queueing of follow-up messages produced while handling a message.
pub trait Responses {
	fn add(&mut self, message: impl Into<Message>);

	fn add_front(&mut self, message: impl Into<Message>);
}

impl Responses for VecDeque<Message> {
	fn add(&mut self, message: impl Into<Message>) {
		self.push_back(message.into());
	}

	fn add_front(&mut self, message: impl Into<Message>) {
		self.push_front(message.into());
	}
}
