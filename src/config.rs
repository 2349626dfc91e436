//! Configuration of a [SystemManager](crate::systems::SystemManager), usually loaded once at startup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Free-form settings handed to [System::initialize](crate::systems::System::initialize).
pub type SystemConfig = toml::Table;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Parse error: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("Serialization error: {0}")]
	Serialize(#[from] toml::ser::Error),
}

/// How [pre-registered](crate::systems::SystemManager::pre_register) systems sharing the
/// same order are replayed by [pre_register_systems](crate::systems::SystemManager::pre_register_systems).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreRegisterOrder {
	/// Equal orders are registered in the order `pre_register` was called.
	#[default]
	Registration,
	/// Equal orders are registered in reverse call order, as if every
	/// `pre_register` call had pushed to the front of the queue.
	Reversed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
	/// Measure the time each system spends in its update and late-update hooks.
	pub profile: bool,
	/// Emit a debug record whenever a system is enabled or disabled.
	pub trace_transitions: bool,
	pub pre_register_order: PreRegisterOrder,
	/// Per-system settings, keyed by system type name.
	pub systems: BTreeMap<String, SystemConfig>,
}

impl Default for ManagerConfig {
	fn default() -> Self {
		Self {
			profile: cfg!(debug_assertions),
			trace_transitions: cfg!(debug_assertions),
			pre_register_order: PreRegisterOrder::default(),
			systems: BTreeMap::new(),
		}
	}
}

impl ManagerConfig {
	/// Parse a configuration from TOML. Missing keys keep their default value.
	pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(contents)?)
	}

	/// Load a configuration from a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let contents = std::fs::read_to_string(path)?;
		Self::from_toml_str(&contents)
	}

	pub fn to_toml_string(&self) -> Result<String, ConfigError> {
		Ok(toml::to_string_pretty(self)?)
	}

	/// The settings registered for the system named `name`, if any.
	pub fn system(&self, name: &str) -> Option<&SystemConfig> {
		self.systems.get(name)
	}
}
