//! Lenient decoding of annotation records written by the backend or found in an imported bundle.
//!
//! Records are checked one at a time: an unknown type or a malformed record is dropped with a warning instead of failing
//! the whole set, a missing or unreadable color falls back to the type's default, and missing or repeated ids are replaced.
//! Intensities outside `[0, 1]` are clamped into range.

use crate::application::generate_uuid;

use pitch_geometry::geometry::validate_point_count;
use pitch_geometry::{Annotation, AnnotationId, AnnotationType, Color, ColorTable};
use rustc_hash::FxHashSet;
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadedAnalysis {
	pub annotations: Vec<Annotation>,
	/// Records that could not be turned into annotations.
	pub skipped: usize,
}

pub fn encode_records(annotations: &[Annotation]) -> Result<Vec<Value>, serde_json::Error> {
	annotations.iter().map(serde_json::to_value).collect()
}

pub fn decode_records(records: Vec<Value>, colors: &ColorTable) -> LoadedAnalysis {
	let mut loaded = LoadedAnalysis::default();
	let mut seen_ids = FxHashSet::default();

	for record in records {
		match decode_record(record, colors, &mut seen_ids) {
			Ok(annotation) => loaded.annotations.push(annotation),
			Err(reason) => {
				log::warn!("Dropping saved annotation: {reason}");
				loaded.skipped += 1;
			}
		}
	}

	loaded
}

fn decode_record(record: Value, colors: &ColorTable, seen_ids: &mut FxHashSet<AnnotationId>) -> Result<Annotation, String> {
	let mut object = match record {
		Value::Object(object) => object,
		other => return Err(format!("expected an object, found {other}")),
	};

	let kind = match object.get("type") {
		Some(Value::String(kind)) => kind.parse::<AnnotationType>().map_err(|error| error.to_string())?,
		_ => return Err("record has no type".into()),
	};

	fill_color(&mut object, colors.get(kind));
	clamp_intensity(&mut object);

	let id = object
		.get("id")
		.and_then(|id| serde_json::from_value::<AnnotationId>(id.clone()).ok())
		.filter(|id| !seen_ids.contains(id))
		.unwrap_or_else(|| loop {
			let id = AnnotationId(generate_uuid());
			if !seen_ids.contains(&id) {
				break id;
			}
		});
	object.insert("id".into(), Value::String(id.to_string()));

	let annotation = serde_json::from_value::<Annotation>(Value::Object(object)).map_err(|error| format!("malformed {kind} record: {error}"))?;
	validate_point_count(kind, annotation.points()).map_err(|error| error.to_string())?;

	seen_ids.insert(id);
	Ok(annotation)
}

fn fill_color(object: &mut Map<String, Value>, default: Color) {
	let readable = matches!(object.get("color"), Some(Value::String(color)) if color.parse::<Color>().is_ok());
	if !readable {
		object.insert("color".into(), Value::String(default.to_rgba_hex()));
	}
}

fn clamp_intensity(object: &mut Map<String, Value>) {
	let Some(intensity) = object.get("intensity").and_then(Value::as_f64) else { return };
	let clamped = intensity.clamp(0., 1.);
	if clamped != intensity {
		object.insert("intensity".into(), Value::from(clamped));
	}
}
