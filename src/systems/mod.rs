//! [Systems](System) provide the per-frame logic of the application.
//!
//! A [System] must be registered with a [SystemManager] for it to become active.
//! It opts into frame phases by declaring [Capabilities]; the manager files it into one
//! [Bucket] per phase family at registration time and never re-evaluates that choice.

mod system;
mod system_id;
mod capabilities;
mod system_order;
mod system_manager;
mod system_instance;

pub use system::*;
pub use system_id::*;
pub use capabilities::*;
pub use system_order::*;
pub use system_manager::*;
pub use system_instance::*;
pub use turbo_scheduler_derive::System;
