//! Component types are owned by the entity storage, not by this crate.
//!
//! Only their identity is needed here: reactive [systems](crate::systems::System) are told
//! which component of which [entity](crate::entities::Entity) appeared or disappeared.

mod component_id;

pub use component_id::*;
