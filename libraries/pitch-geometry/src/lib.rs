//! Data model and pure math behind the tactical annotation overlay.
//!
//! Everything in this crate is side-effect free: annotations are plain values, the isometric transform is a fixed
//! function of a point and the video frame size, and shape geometry is derived on demand from captured points.

pub mod annotation;
pub mod color;
pub mod consts;
pub mod frame;
pub mod geometry;
pub mod player;
pub mod transform;

pub use annotation::{Annotation, AnnotationId, AnnotationType, PointRequirement, ShapeFamily, UnknownAnnotationType, VideoPosition};
pub use color::{Color, ColorParseError, ColorTable};
pub use frame::{FrameSize, PerspectiveMode};
pub use geometry::{CommitOptions, DerivedValues, GeometryError, build_annotation, compute_derived};
pub use player::{PlayerPosition, PositionSpace, Team};
pub use transform::{perspective_skew, transform, transform_with_mode};
