use rustc_hash::FxHashMap;

use crate::face::Face;

/// Number of color specs a registry can hold.
pub const FACE_REGISTRY_CAPACITY: usize = 128;

/// Append-only table interning color specs as [`Face`] bytes.
///
/// Specs are SGR parameter strings (e.g. `"1;31"`), deduplicated by exact
/// string equality. Two registries are equal when they hold the same specs in
/// the same order.
#[derive(Debug, Clone, Default)]
pub struct FaceRegistry {
	specs: Vec<String>,
	index: FxHashMap<String, Face>,
}

impl PartialEq for FaceRegistry {
	fn eq(&self, other: &Self) -> bool {
		self.specs == other.specs
	}
}

impl Eq for FaceRegistry {}

impl FaceRegistry {
	/// Returns the face for `spec`, registering it if new.
	///
	/// Returns `None` once the registry is full.
	pub fn ensure(&mut self, spec: &str) -> Option<Face> {
		if let Some(&face) = self.index.get(spec) {
			return Some(face);
		}
		if self.specs.len() >= FACE_REGISTRY_CAPACITY {
			tracing::warn!(spec, "face registry full; color ignored");
			return None;
		}

		let face = Face(Face::CUSTOM_BASE + self.specs.len() as u8);
		self.specs.push(spec.to_string());
		self.index.insert(spec.to_string(), face);
		Some(face)
	}

	/// Color spec for a registry face.
	pub fn output(&self, face: Face) -> Option<&str> {
		if !face.is_custom() {
			return None;
		}
		self.specs.get(usize::from(face.0 - Face::CUSTOM_BASE)).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.specs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.specs.is_empty()
	}

	pub fn specs(&self) -> &[String] {
		&self.specs
	}

	pub fn clear(&mut self) {
		self.specs.clear();
		self.index.clear();
	}
}
