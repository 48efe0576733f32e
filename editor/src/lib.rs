//! The message-driven core of the tactical annotation overlay: the drawing tool, the annotation store, the overlay
//! renderer, and persistence of annotation sets.

pub mod application;
pub mod consts;
pub mod dispatcher;
pub mod messages;
pub mod persistence;
pub mod utility_traits;

#[cfg(test)]
pub mod test_utils;

#[doc(inline)]
pub use application::{Editor, generate_uuid, set_uuid_seed};
#[doc(inline)]
pub use persistence::{BundleError, PersistenceError};
