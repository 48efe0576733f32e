use pitch_geometry::Annotation;

/// Ordered collection of committed annotations for one video. Insertion order is drawing order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotationStore {
	annotations: Vec<Annotation>,
}

impl AnnotationStore {
	pub fn add(&mut self, annotation: Annotation) {
		self.annotations.push(annotation);
	}

	pub fn clear_all(&mut self) {
		self.annotations.clear();
	}

	/// Swaps in a whole set, typically one loaded from a saved analysis.
	pub fn replace_all(&mut self, annotations: Vec<Annotation>) {
		self.annotations = annotations;
	}

	/// A copy of the full ordered collection, detached from later changes to the store.
	pub fn snapshot(&self) -> Vec<Annotation> {
		self.annotations.clone()
	}

	pub fn as_slice(&self) -> &[Annotation] {
		&self.annotations
	}

	pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
		self.annotations.iter()
	}

	pub fn len(&self) -> usize {
		self.annotations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.annotations.is_empty()
	}
}

#[cfg(test)]
mod test_annotation_store {
	use super::*;
	use crate::test_utils::sample_annotation;

	use pitch_geometry::AnnotationType;
	use pretty_assertions::assert_eq;

	#[test]
	fn replace_all_discards_previous_contents() {
		let [a, b, c] = [1, 2, 3].map(|id| sample_annotation(id, AnnotationType::Line));
		let mut store = AnnotationStore::default();

		store.replace_all(vec![a, b]);
		store.replace_all(vec![c.clone()]);

		assert_eq!(store.snapshot(), vec![c]);
	}

	#[test]
	fn clear_all_is_idempotent() {
		let mut store = AnnotationStore::default();
		for id in 0..5 {
			store.add(sample_annotation(id, AnnotationType::Circle));
		}
		assert_eq!(store.len(), 5);

		store.clear_all();
		assert!(store.is_empty());
		store.clear_all();
		assert!(store.is_empty());
	}

	#[test]
	fn preserves_insertion_order() {
		let mut store = AnnotationStore::default();
		for id in [9, 3, 7] {
			store.add(sample_annotation(id, AnnotationType::Arrow));
		}

		let ids = store.iter().map(|annotation| annotation.id().0).collect::<Vec<_>>();
		assert_eq!(ids, vec![9, 3, 7]);
	}

	#[test]
	fn snapshot_is_detached() {
		let mut store = AnnotationStore::default();
		store.add(sample_annotation(1, AnnotationType::Area));
		let snapshot = store.snapshot();

		store.clear_all();
		assert_eq!(snapshot.len(), 1);
	}
}
