use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::sdk::{Model, Result, Shape, ShapeRef, resolve};

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Append-only cache of resolved shapes keyed by type identity.
///
/// A shape is published together with every shape reachable through its
/// nested list fields, and only once that whole closure resolved. Published
/// entries are never replaced.
#[derive(Debug, Default)]
pub struct Registry {
	shapes: RwLock<HashMap<TypeId, Arc<Shape>>>,
}

impl Registry {
	/// Create an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Process-wide registry used by the free-function entry points.
	pub fn global() -> &'static Registry {
		&GLOBAL
	}

	/// Resolve (or fetch) the shape of `T`.
	pub fn resolve<T: Model>(&self) -> Result<Arc<Shape>> {
		self.resolve_ref(ShapeRef::of::<T>())
	}

	/// Resolve (or fetch) a referenced shape.
	pub fn resolve_ref(&self, shape: ShapeRef) -> Result<Arc<Shape>> {
		let id = shape.id();
		if let Some(found) = self.get(id) {
			return Ok(found);
		}

		let mut pending = Vec::new();
		self.collect_closure(shape, &mut pending)?;

		let mut shapes = self.shapes.write();
		for (nested_id, resolved) in pending {
			shapes.entry(nested_id).or_insert_with(|| Arc::new(resolved));
		}
		Ok(shapes[&id].clone())
	}

	/// Fetch an already published shape.
	pub fn get(&self, id: TypeId) -> Option<Arc<Shape>> {
		self.shapes.read().get(&id).cloned()
	}

	/// Number of published shapes.
	pub fn len(&self) -> usize {
		self.shapes.read().len()
	}

	/// Whether no shape has been published yet.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn collect_closure(&self, shape: ShapeRef, pending: &mut Vec<(TypeId, Shape)>) -> Result<()> {
		let resolved = resolve(&shape.decl())?;
		let nested: Vec<ShapeRef> = resolved.nested().collect();
		pending.push((shape.id(), resolved));

		for item in nested {
			let nested_id = item.id();
			if pending.iter().any(|(id, _)| *id == nested_id) || self.get(nested_id).is_some() {
				continue;
			}
			self.collect_closure(item, pending)?;
		}
		Ok(())
	}
}
