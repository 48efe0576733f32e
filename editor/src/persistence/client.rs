use super::records::{LoadedAnalysis, decode_records, encode_records};
use super::{PersistenceBackend, PersistenceError, SaveRequest, SessionKey};

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use pitch_geometry::{Annotation, ColorTable};
use rustc_hash::FxHashSet;
use std::sync::{Arc, Mutex, PoisonError};

/// Talks to a [`PersistenceBackend`] on behalf of the editor, allowing at most one save in flight per session.
pub struct PersistenceClient<B> {
	backend: B,
	in_flight: Arc<Mutex<FxHashSet<SessionKey>>>,
}

/// Marks a session as saving until dropped.
struct InFlightGuard {
	key: SessionKey,
	in_flight: Arc<Mutex<FxHashSet<SessionKey>>>,
}

impl Drop for InFlightGuard {
	fn drop(&mut self) {
		self.in_flight.lock().unwrap_or_else(PoisonError::into_inner).remove(&self.key);
	}
}

impl<B: PersistenceBackend> PersistenceClient<B> {
	pub fn new(backend: B) -> Self {
		Self {
			backend,
			in_flight: Default::default(),
		}
	}

	pub fn backend(&self) -> &B {
		&self.backend
	}

	pub fn is_saving(&self, key: &SessionKey) -> bool {
		self.in_flight.lock().unwrap_or_else(PoisonError::into_inner).contains(key)
	}

	/// Starts saving `annotations` under `key`, tagged with the playback position `timestamp` in seconds.
	/// The session counts as saving from this call until the returned future completes or is dropped,
	/// and any other save for the same session in that window fails with [`PersistenceError::SaveInFlight`].
	pub fn save(&self, key: SessionKey, timestamp: f64, annotations: &[Annotation]) -> BoxFuture<'static, Result<(), PersistenceError>> {
		let Some(guard) = self.begin_save(&key) else {
			log::warn!("Rejected save for {key} while another is in progress");
			return future::ready(Err(PersistenceError::SaveInFlight(key))).boxed();
		};

		let records = match encode_records(annotations) {
			Ok(records) => records,
			Err(error) => return future::ready(Err(error.into())).boxed(),
		};

		let count = records.len();
		let request = self.backend.save(SaveRequest { key, timestamp, records });
		async move {
			let result = request.await;
			match &result {
				Ok(()) => log::debug!("Saved {count} annotation(s) for {}", guard.key),
				Err(error) => log::warn!("Saving annotations for {} failed: {error}", guard.key),
			}
			drop(guard);
			result
		}
		.boxed()
	}

	/// Fetches and decodes the annotations saved under `key`. Records that cannot be decoded are counted in [`LoadedAnalysis::skipped`].
	/// The returned future borrows neither the client nor the caller.
	pub fn load(&self, key: SessionKey, colors: ColorTable) -> BoxFuture<'static, Result<LoadedAnalysis, PersistenceError>> {
		let request = self.backend.load(&key);
		async move {
			let records = request.await.inspect_err(|error| log::warn!("Loading annotations for {key} failed: {error}"))?;

			let loaded = decode_records(records, &colors);
			if loaded.skipped > 0 {
				log::warn!("Skipped {} unreadable annotation(s) for {key}", loaded.skipped);
			}
			Ok(loaded)
		}
		.boxed()
	}

	fn begin_save(&self, key: &SessionKey) -> Option<InFlightGuard> {
		let inserted = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner).insert(key.clone());
		inserted.then(|| InFlightGuard {
			key: key.clone(),
			in_flight: self.in_flight.clone(),
		})
	}
}

#[cfg(test)]
mod test_persistence_client {
	use super::*;
	use crate::persistence::InMemoryBackend;
	use crate::test_utils::sample_annotation;

	use pitch_geometry::AnnotationType;
	use pretty_assertions::assert_eq;

	fn key() -> SessionKey {
		SessionKey::from_video_url("https://example.com/final.mp4")
	}

	#[tokio::test]
	async fn second_save_is_rejected_while_first_is_pending() {
		let client = PersistenceClient::new(InMemoryBackend::default());
		let annotations = vec![sample_annotation(1, AnnotationType::Line)];

		let first = client.save(key(), 0., &annotations);
		assert!(client.is_saving(&key()));
		assert!(matches!(client.save(key(), 0., &annotations).await, Err(PersistenceError::SaveInFlight(rejected)) if rejected == key()));

		first.await.unwrap();
		assert!(!client.is_saving(&key()));
		client.save(key(), 0., &annotations).await.unwrap();
	}

	#[tokio::test]
	async fn other_sessions_save_concurrently() {
		let client = PersistenceClient::new(InMemoryBackend::default());
		let other = SessionKey::from_video_url("https://example.com/semi.mp4");

		let first = client.save(key(), 0., &[]);
		let second = client.save(other, 0., &[]);
		let (first, second) = futures::join!(first, second);

		assert!(first.is_ok() && second.is_ok());
	}

	#[tokio::test]
	async fn dropped_save_releases_the_session() {
		let client = PersistenceClient::new(InMemoryBackend::default());

		drop(client.save(key(), 0., &[]));
		assert!(!client.is_saving(&key()));
	}

	#[tokio::test]
	async fn failed_save_is_reported_and_releases_the_session() {
		let backend = InMemoryBackend::default();
		let client = PersistenceClient::new(backend.clone());

		backend.fail_with("quota exceeded");
		assert!(matches!(client.save(key(), 0., &[]).await, Err(PersistenceError::Backend(_))));
		assert!(!client.is_saving(&key()));
		assert_eq!(backend.records(&key()), None);
	}

	#[tokio::test]
	async fn saved_set_loads_back() {
		let client = PersistenceClient::new(InMemoryBackend::default());
		let annotations = vec![sample_annotation(1, AnnotationType::Distance), sample_annotation(2, AnnotationType::PressureZone)];

		client.save(key(), 0., &annotations).await.unwrap();
		let loaded = client.load(key(), ColorTable::DEFAULT).await.unwrap();

		assert_eq!(loaded, LoadedAnalysis { annotations, skipped: 0 });
	}

	#[tokio::test]
	async fn save_carries_the_playback_position() {
		let backend = InMemoryBackend::default();
		let client = PersistenceClient::new(backend.clone());

		client.save(key(), 2712.5, &[sample_annotation(1, AnnotationType::Arrow)]).await.unwrap();

		assert_eq!(backend.saved_at(&key()), Some(2712.5));
		assert_eq!(backend.records(&key()).map(|records| records.len()), Some(1));
	}
}
