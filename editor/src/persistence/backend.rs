use super::{PersistenceError, SessionKey};

use futures::FutureExt;
use futures::future::BoxFuture;
use rustc_hash::FxHashMap;
use serde_json::Value;
use std::sync::{Arc, Mutex, PoisonError};

/// A full replacement of the records stored for one session.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveRequest {
	pub key: SessionKey,
	/// Playback position in seconds when the save was requested.
	pub timestamp: f64,
	pub records: Vec<Value>,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct StoredSession {
	timestamp: f64,
	records: Vec<Value>,
}

/// Storage for saved annotation sets. Implementations only move JSON records around and never block the caller.
pub trait PersistenceBackend: Send + Sync {
	fn save(&self, request: SaveRequest) -> BoxFuture<'static, Result<(), PersistenceError>>;

	/// Records saved for `key`, or none if nothing was ever saved.
	fn load(&self, key: &SessionKey) -> BoxFuture<'static, Result<Vec<Value>, PersistenceError>>;
}

/// Keeps sessions in memory, shared between clones. Can be told to fail to exercise error paths.
#[derive(Clone, Debug, Default)]
pub struct InMemoryBackend {
	sessions: Arc<Mutex<FxHashMap<SessionKey, StoredSession>>>,
	failure: Arc<Mutex<Option<String>>>,
}

impl InMemoryBackend {
	/// Makes every following request fail with `message` until [`InMemoryBackend::recover`] is called.
	pub fn fail_with(&self, message: impl Into<String>) {
		*self.failure.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.into());
	}

	pub fn recover(&self) {
		*self.failure.lock().unwrap_or_else(PoisonError::into_inner) = None;
	}

	/// Stores records as-is, bypassing validation, as another client or an older version might have written them.
	pub fn insert_raw(&self, key: SessionKey, records: Vec<Value>) {
		self.store(key, StoredSession { timestamp: 0., records });
	}

	pub fn records(&self, key: &SessionKey) -> Option<Vec<Value>> {
		self.sessions.lock().unwrap_or_else(PoisonError::into_inner).get(key).map(|session| session.records.clone())
	}

	/// Playback position carried by the last save for `key`.
	pub fn saved_at(&self, key: &SessionKey) -> Option<f64> {
		self.sessions.lock().unwrap_or_else(PoisonError::into_inner).get(key).map(|session| session.timestamp)
	}

	fn store(&self, key: SessionKey, session: StoredSession) {
		self.sessions.lock().unwrap_or_else(PoisonError::into_inner).insert(key, session);
	}

	fn check_failure(&self) -> Result<(), PersistenceError> {
		match self.failure.lock().unwrap_or_else(PoisonError::into_inner).as_ref() {
			Some(message) => Err(PersistenceError::Backend(message.clone())),
			None => Ok(()),
		}
	}
}

impl PersistenceBackend for InMemoryBackend {
	fn save(&self, request: SaveRequest) -> BoxFuture<'static, Result<(), PersistenceError>> {
		let backend = self.clone();
		async move {
			backend.check_failure()?;
			let SaveRequest { key, timestamp, records } = request;
			backend.store(key, StoredSession { timestamp, records });
			Ok(())
		}
		.boxed()
	}

	fn load(&self, key: &SessionKey) -> BoxFuture<'static, Result<Vec<Value>, PersistenceError>> {
		let backend = self.clone();
		let key = key.clone();
		async move {
			backend.check_failure()?;
			Ok(backend.records(&key).unwrap_or_default())
		}
		.boxed()
	}
}
