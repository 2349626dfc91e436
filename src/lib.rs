//! The scheduling core of an entity-component-system runtime.
//!
//! A [SystemManager](systems::SystemManager) keeps every registered [System](systems::System)
//! sorted by [order](systems::SystemOrder) and drives them through one frame per
//! [update](systems::SystemManager::update): enable, start, reactive, update, late-update, disable.

// Lets code generated by #[derive(System)] name this crate from inside it.
extern crate self as turbo_scheduler;

pub mod data_structures;
pub mod components;
pub mod entities;
pub mod systems;
pub mod config;
pub mod time;

pub use lazy_static::lazy_static;

pub mod prelude {
	pub use crate::systems::*;
	pub use crate::components::ComponentId;
	pub use crate::time::{Clock, FrameClock, ManualClock};
	pub use crate::config::{ConfigError, ManagerConfig, PreRegisterOrder, SystemConfig};
	pub use crate::entities::{ChangeCollector, Collector, ComponentHandle, Entity, SharedCollector};
}

#[cfg(test)]
mod tests;
