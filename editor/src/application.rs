use crate::dispatcher::Dispatcher;
use crate::messages::preferences::utility_types::Preferences;
use crate::messages::prelude::*;
use crate::messages::tool::utility_types::DrawingSession;
use crate::messages::video::utility_types::VideoState;
use crate::persistence::{AnalysisBundle, BundleError, PersistenceBackend, PersistenceClient, PersistenceError, SessionKey};

pub use uuid_generation::{generate_uuid, set_uuid_seed};

use futures::future::BoxFuture;
use futures::{FutureExt, TryFutureExt};
use pitch_geometry::Annotation;

/// One overlay bound to one video element. All state changes go through [`Editor::handle_message`].
pub struct Editor {
	pub dispatcher: Dispatcher,
}

impl Editor {
	/// Construct the editor.
	/// Provide a random seed with `set_uuid_seed(seed)` first for annotation ids that differ between sessions.
	pub fn new() -> Self {
		Self { dispatcher: Dispatcher::new() }
	}

	pub fn handle_message<T: Into<Message>>(&mut self, message: T) -> Vec<FrontendMessage> {
		self.dispatcher.handle_message(message);

		std::mem::take(&mut self.dispatcher.responses)
	}

	pub fn annotations(&self) -> &[Annotation] {
		self.dispatcher.message_handlers.annotations_message_handler.store().as_slice()
	}

	pub fn session(&self) -> &DrawingSession {
		self.dispatcher.message_handlers.tool_message_handler.session()
	}

	pub fn video(&self) -> &VideoState {
		self.dispatcher.message_handlers.video_message_handler.state()
	}

	pub fn preferences(&self) -> &Preferences {
		self.dispatcher.message_handlers.preferences_message_handler.preferences()
	}

	/// Hands a snapshot of the current annotations to the persistence backend, stamped with the current playback position.
	/// The returned future does not borrow the editor, so editing can continue while the save is pending.
	pub fn save_analysis<B: PersistenceBackend>(&self, client: &PersistenceClient<B>, video_url: &str) -> BoxFuture<'static, Result<(), PersistenceError>> {
		let snapshot = self.dispatcher.message_handlers.annotations_message_handler.store().snapshot();
		client.save(SessionKey::from_video_url(video_url), self.video().current_time, &snapshot)
	}

	/// Fetches the set saved for this video. The future resolves to the message that replaces the current annotations,
	/// which the host passes to [`Editor::handle_message`] once it arrives. The editor is not borrowed while the load is pending.
	/// On failure nothing is replaced.
	pub fn load_analysis<B: PersistenceBackend>(&self, client: &PersistenceClient<B>, video_url: &str) -> BoxFuture<'static, Result<AnnotationsMessage, PersistenceError>> {
		client
			.load(SessionKey::from_video_url(video_url), self.preferences().color_table())
			.map_ok(|loaded| AnnotationsMessage::ReplaceAll { annotations: loaded.annotations })
			.boxed()
	}

	/// Replaces the current annotations with those of an exported analysis bundle.
	pub fn import_bundle(&mut self, json: &str) -> Result<Vec<FrontendMessage>, BundleError> {
		let imported = AnalysisBundle::from_json(json, &self.preferences().color_table())?;
		if imported.skipped > 0 {
			log::warn!("Skipped {} unreadable annotation(s) while importing {}", imported.skipped, imported.bundle.video_url);
		}

		Ok(self.handle_message(AnnotationsMessage::ReplaceAll {
			annotations: imported.bundle.annotations,
		}))
	}
}

impl Default for Editor {
	fn default() -> Self {
		Self::new()
	}
}

mod uuid_generation {
	use rand_chacha::ChaCha20Rng;
	use rand_chacha::rand_core::{RngCore, SeedableRng};
	use std::cell::Cell;
	use std::sync::{Mutex, PoisonError};

	static RNG: Mutex<Option<ChaCha20Rng>> = Mutex::new(None);
	thread_local! {
		pub static UUID_SEED: Cell<Option<u64>> = const { Cell::new(None) };
	}

	pub fn set_uuid_seed(random_seed: u64) {
		UUID_SEED.with(|seed| seed.set(Some(random_seed)))
	}

	pub fn generate_uuid() -> u64 {
		let mut lock = RNG.lock().unwrap_or_else(PoisonError::into_inner);
		let rng = lock.get_or_insert_with(|| ChaCha20Rng::seed_from_u64(UUID_SEED.with(|seed| seed.get().unwrap_or(42))));
		rng.next_u64()
	}
}
