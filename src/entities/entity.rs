use crate::components::ComponentId;

/// A unique handle to an `Entity`
#[derive(Default, Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct Entity {
	pub(crate) index: u32,
	pub(crate) version: u32,
}

impl Entity {
	pub const fn new(index: u32, version: u32) -> Self {
		Self { index, version }
	}

	#[inline(always)]
	pub const fn index(&self) -> u32 {
		self.index
	}

	#[inline(always)]
	pub const fn version(&self) -> u32 {
		self.version
	}
}

/// Names one component attached to an [Entity].
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct ComponentHandle {
	entity: Entity,
	component: ComponentId,
}

impl ComponentHandle {
	pub const fn new(entity: Entity, component: ComponentId) -> Self {
		Self { entity, component }
	}

	/// The handle of the component of type `T` attached to `entity`.
	pub fn of<T: 'static>(entity: Entity) -> Self {
		Self::new(entity, ComponentId::of::<T>())
	}

	#[inline(always)]
	pub const fn entity(&self) -> Entity {
		self.entity
	}

	#[inline(always)]
	pub const fn component(&self) -> ComponentId {
		self.component
	}
}
