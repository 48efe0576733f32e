//! Saving and loading annotation sets through an external backend, and the downloadable analysis bundle.
//!
//! The backend is a collaborator behind the [`PersistenceBackend`] trait. It exchanges plain JSON records so it never
//! needs to understand annotations; decoding and validation happen on this side in [`records`].

mod backend;
mod bundle;
mod client;
mod session_key;

pub mod records;

pub use backend::{InMemoryBackend, PersistenceBackend, SaveRequest};
pub use bundle::{AnalysisBundle, BundleError, CameraMovement, CameraMovementKind, ImportedBundle};
pub use client::PersistenceClient;
pub use records::LoadedAnalysis;
pub use session_key::SessionKey;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
	#[error("a save for session {0} is already in progress")]
	SaveInFlight(SessionKey),

	#[error("persistence backend failed: {0}")]
	Backend(String),

	#[error("could not serialize annotations: {0}")]
	Serialization(#[from] serde_json::Error),
}
