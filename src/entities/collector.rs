use crate::entities::{ComponentHandle, Entity};
use std::cell::RefCell;
use std::rc::Rc;

/// The changes observed by one entity group since the previous frame.
///
/// Every sequence is only valid for the current frame. Whatever a system does not
/// consume during the frame's reactive dispatch is gone once the owner clears the collector.
pub trait Collector {
	fn added_entities(&self) -> &[Entity];
	fn added_components(&self) -> &[ComponentHandle];
	fn removed_components(&self) -> &[ComponentHandle];
	fn removed_entities(&self) -> &[Entity];
}

/// A [Collector] shared between the storage that fills it and the systems that drain it.
pub type SharedCollector = Rc<RefCell<dyn Collector>>;

/// A plain [Collector] recording changes in the order they are reported.
#[derive(Default, Clone, Debug)]
pub struct ChangeCollector {
	added_entities: Vec<Entity>,
	added_components: Vec<ComponentHandle>,
	removed_components: Vec<ComponentHandle>,
	removed_entities: Vec<Entity>,
}

impl ChangeCollector {
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty collector ready to be attached to one or more systems.
	pub fn shared() -> Rc<RefCell<Self>> {
		Rc::new(RefCell::new(Self::new()))
	}

	pub fn entity_added(&mut self, entity: Entity) {
		self.added_entities.push(entity);
	}

	pub fn component_added(&mut self, component: ComponentHandle) {
		self.added_components.push(component);
	}

	pub fn component_removed(&mut self, component: ComponentHandle) {
		self.removed_components.push(component);
	}

	pub fn entity_removed(&mut self, entity: Entity) {
		self.removed_entities.push(entity);
	}

	/// Forget every recorded change. Called by the owner between frames.
	pub fn clear(&mut self) {
		self.added_entities.clear();
		self.added_components.clear();
		self.removed_components.clear();
		self.removed_entities.clear();
	}

	pub fn is_empty(&self) -> bool {
		self.added_entities.is_empty()
			&& self.added_components.is_empty()
			&& self.removed_components.is_empty()
			&& self.removed_entities.is_empty()
	}
}

impl Collector for ChangeCollector {
	fn added_entities(&self) -> &[Entity] {
		&self.added_entities
	}

	fn added_components(&self) -> &[ComponentHandle] {
		&self.added_components
	}

	fn removed_components(&self) -> &[ComponentHandle] {
		&self.removed_components
	}

	fn removed_entities(&self) -> &[Entity] {
		&self.removed_entities
	}
}
