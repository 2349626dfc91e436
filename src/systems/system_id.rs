//! A unique runtime identifier tied to a [System](crate::systems::System) type.
//!
//! Ids are handed out lazily by #\[derive([System](crate::systems::System))], the first time a
//! type's id is requested. They are not stable between program re-runs.

use crate::systems::SystemTypeInfo;
use std::sync::atomic::Ordering::Relaxed;
use std::sync::atomic::AtomicUsize;

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// A globally unique identifier for a type implementing [SystemTypeInfo].
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct SystemId {
	value: usize,
}

impl SystemId {
	/// Get the [SystemId] of the type `T`.
	#[inline(always)]
	pub fn of<T: SystemTypeInfo>() -> SystemId {
		T::system_id()
	}

	#[inline(always)]
	pub const fn value(&self) -> usize {
		self.value
	}
}

/// Generates a new [SystemId]. **Should not be called from user code.**
///
/// To be called from code generated by #\[derive([System](crate::systems::System))].
#[doc(hidden)]
pub fn next_system_id() -> SystemId {
	SystemId {
		value: NEXT_ID.fetch_add(1, Relaxed),
	}
}
