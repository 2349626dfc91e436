use crate::systems::{AnySystem, Capabilities, System, SystemId, SystemOrder, SystemTypeInfo};
use crate::entities::SharedCollector;
use std::fmt::{Debug, Formatter};
use std::time::Duration;

/// A registered [System] together with the state the manager keeps for it.
///
/// The enabled state is tracked twice: the desired value, which anybody can change through
/// [set_enabled](SystemInstance::set_enabled), and the applied value, which only catches up at the
/// end of a frame. Enable and disable hooks fire on the difference between the two.
pub struct SystemInstance {
	id: SystemId,
	name: &'static str,
	order: SystemOrder,
	capabilities: Capabilities,

	pub(crate) enabled: bool,
	pub(crate) applied_enabled: bool,
	pub(crate) started: bool,
	pub(crate) delta_time: Duration,

	pub(crate) collectors: Vec<SharedCollector>,
	pub(crate) system: Box<dyn AnySystem>,
}

impl SystemInstance {
	pub(crate) fn new<T: System + SystemTypeInfo>(system: T, order: SystemOrder) -> Self {
		Self {
			id: T::system_id(),
			name: T::type_name(),
			order,
			capabilities: system.capabilities(),

			enabled: true,
			applied_enabled: false,
			started: false,
			delta_time: Duration::ZERO,

			collectors: Vec::new(),
			system: Box::new(system),
		}
	}

	#[inline(always)]
	pub fn id(&self) -> SystemId {
		self.id
	}

	/// The type name of the system.
	#[inline(always)]
	pub fn name(&self) -> &'static str {
		self.name
	}

	#[inline(always)]
	pub fn order(&self) -> SystemOrder {
		self.order
	}

	/// The hooks captured when the system was registered.
	#[inline(always)]
	pub fn capabilities(&self) -> Capabilities {
		self.capabilities
	}

	/// The desired enabled state.
	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	/// Request the system to be enabled or disabled.
	/// Update, late-update and reactive hooks follow the new value from the next phase on;
	/// enable and disable hooks fire during the next [update](crate::systems::SystemManager::update).
	pub fn set_enabled(&mut self, enabled: bool) {
		self.enabled = enabled;
	}

	/// The enabled state as of the end of the last frame.
	/// Only systems implementing an enable or disable hook ever have it updated.
	pub fn is_applied_enabled(&self) -> bool {
		self.applied_enabled
	}

	pub fn is_started(&self) -> bool {
		self.started
	}

	/// Time spent in this system's update and late-update hooks during the last frame.
	/// Always zero unless profiling is turned on in the [ManagerConfig](crate::config::ManagerConfig).
	pub fn delta_time(&self) -> Duration {
		self.delta_time
	}

	pub fn collectors(&self) -> &[SharedCollector] {
		&self.collectors
	}

	/// Attach a change source. Reactive hooks drain collectors in attachment order.
	pub fn attach_collector(&mut self, collector: SharedCollector) {
		self.collectors.push(collector);
	}

	pub fn downcast_ref<T: System>(&self) -> Option<&T> {
		self.system.as_any().downcast_ref::<T>()
	}

	pub fn downcast_mut<T: System>(&mut self) -> Option<&mut T> {
		self.system.as_any_mut().downcast_mut::<T>()
	}
}

impl Debug for SystemInstance {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SystemInstance")
			.field("id", &self.id)
			.field("name", &self.name)
			.field("order", &self.order)
			.field("capabilities", &self.capabilities)
			.field("enabled", &self.enabled)
			.field("applied_enabled", &self.applied_enabled)
			.field("started", &self.started)
			.field("collectors", &self.collectors.len())
			.finish()
	}
}
