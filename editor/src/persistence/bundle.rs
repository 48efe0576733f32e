use super::records::{LoadedAnalysis, decode_records};
use crate::consts::EXPORT_FILE_PREFIX;

use chrono::{DateTime, Utc};
use pitch_geometry::{Annotation, ColorTable};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraMovementKind {
	Pan,
	Zoom,
	Tilt,
	Static,
}

/// Camera motion detected at a point in the video, carried along in exports for downstream analysis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraMovement {
	pub timestamp: f64,
	#[serde(rename = "type")]
	pub kind: CameraMovementKind,
	#[serde(default)]
	pub dx: f64,
	#[serde(default)]
	pub dy: f64,
	#[serde(default = "unit_zoom")]
	pub zoom: f64,
}

fn unit_zoom() -> f64 {
	1.
}

/// The document offered for download when an analysis is exported.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisBundle {
	pub video_url: String,
	pub analysis_date: DateTime<Utc>,
	pub annotations: Vec<Annotation>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub camera_movements: Option<Vec<CameraMovement>>,
}

#[derive(Debug, thiserror::Error)]
pub enum BundleError {
	#[error("analysis bundle is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),

	#[error("analysis bundle has no video url")]
	MissingVideoUrl,
}

/// A bundle read back from JSON, with the number of annotation records that had to be dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportedBundle {
	pub bundle: AnalysisBundle,
	pub skipped: usize,
}

/// Same shape as [`AnalysisBundle`] but with annotations left as raw records so each can be checked on its own.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBundle {
	#[serde(default)]
	video_url: String,
	analysis_date: DateTime<Utc>,
	#[serde(default)]
	annotations: Vec<Value>,
	#[serde(default)]
	camera_movements: Option<Vec<CameraMovement>>,
}

impl AnalysisBundle {
	pub fn new(video_url: impl Into<String>, analysis_date: DateTime<Utc>, annotations: Vec<Annotation>) -> Self {
		Self {
			video_url: video_url.into(),
			analysis_date,
			annotations,
			camera_movements: None,
		}
	}

	pub fn with_camera_movements(mut self, camera_movements: Vec<CameraMovement>) -> Self {
		self.camera_movements = Some(camera_movements);
		self
	}

	/// Download name, such as `match-analysis-2024-05-18.json`.
	pub fn file_name(&self) -> String {
		format!("{EXPORT_FILE_PREFIX}-{}.json", self.analysis_date.format("%Y-%m-%d"))
	}

	pub fn to_json(&self) -> Result<String, BundleError> {
		Ok(serde_json::to_string_pretty(self)?)
	}

	/// Reads a bundle, dropping annotation records with an unknown type or malformed content rather than rejecting the whole file.
	pub fn from_json(json: &str, colors: &ColorTable) -> Result<ImportedBundle, BundleError> {
		let raw: RawBundle = serde_json::from_str(json)?;
		if raw.video_url.trim().is_empty() {
			return Err(BundleError::MissingVideoUrl);
		}

		let LoadedAnalysis { annotations, skipped } = decode_records(raw.annotations, colors);
		let bundle = AnalysisBundle {
			video_url: raw.video_url,
			analysis_date: raw.analysis_date,
			annotations,
			camera_movements: raw.camera_movements,
		};

		Ok(ImportedBundle { bundle, skipped })
	}
}
