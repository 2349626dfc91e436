use crate::entities::{Collector, ComponentHandle, Entity};
use crate::systems::{Capabilities, SystemId};
use crate::config::SystemConfig;
use std::any::Any;

/// It provides the per-frame logic of the application.
///
/// Every hook is optional. A hook is only dispatched when the matching flag is part of
/// [capabilities](System::capabilities), which the [SystemManager](crate::systems::SystemManager)
/// reads once, at registration.
pub trait System: 'static {
	/// The hooks this system implements.
	fn capabilities(&self) -> Capabilities;

	/// Called exactly once, right after the system has been registered.
	fn initialize(&mut self, _config: Option<&SystemConfig>) {}

	/// Called during the frame in which the system goes from disabled to enabled,
	/// including the first frame after registration.
	fn on_enable(&mut self) {}

	/// Called at the end of the frame in which the system goes from enabled to disabled.
	fn on_disable(&mut self) {}

	/// Called once, during the first frame after registration.
	fn on_start(&mut self) {}

	fn on_entity_added(&mut self, _entity: Entity, _collector: &dyn Collector) {}

	fn on_component_added(&mut self, _component: ComponentHandle, _collector: &dyn Collector) {}

	fn on_component_removed(&mut self, _component: ComponentHandle, _collector: &dyn Collector) {}

	fn on_entity_removed(&mut self, _entity: Entity, _collector: &dyn Collector) {}

	/// # Arguments
	/// * `delta_time` - Elapsed seconds since the previous frame
	fn on_update(&mut self, _delta_time: f32) {}

	/// # Arguments
	/// * `delta_time` - Elapsed seconds since the previous frame
	fn on_late_update(&mut self, _delta_time: f32) {}
}

/// This trait should only be implemented by #\[derive([`System`])].
/// It gives every system type a stable identity for registration and lookup.
pub trait SystemTypeInfo {
	fn system_id() -> SystemId;
	fn type_name() -> &'static str;
}

pub(crate) trait AnySystem: System {
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: System> AnySystem for T {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}
