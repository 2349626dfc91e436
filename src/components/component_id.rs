//! A unique runtime identifier tied to a component type.
//!
//! Developers shouldn't rely on [component ids](ComponentId), as they are not stable between program re-runs.

use std::sync::atomic::Ordering::Relaxed;
use std::sync::atomic::AtomicUsize;
use std::collections::HashMap;
use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::any::TypeId;

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

lazy_static! {
	static ref TYPE_TO_ID: Mutex<HashMap<TypeId, ComponentId>> = Mutex::new(HashMap::default());
}

/// A globally unique identifier for a component type.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct ComponentId {
	value: usize,
}

impl ComponentId {
	/// Get the [ComponentId] of the type `T`, allocating one on first use.
	pub fn of<T: 'static>() -> ComponentId {
		let mut ids = TYPE_TO_ID.lock();
		*ids.entry(TypeId::of::<T>()).or_insert_with(|| {
			let value = NEXT_ID.fetch_add(1, Relaxed);
			debug_assert!(
				value <= u32::MAX as usize,
				"This is an insane number of components. Please seek help."
			);
			ComponentId { value }
		})
	}

	#[inline(always)]
	pub const fn value(&self) -> usize {
		self.value
	}
}
