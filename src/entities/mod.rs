//! [Entities](Entity) are owned by external storage; this module only carries their handles
//! and the per-frame change sets ([Collectors](Collector)) that reactive systems drain.

mod entity;
mod collector;

pub use entity::*;
pub use collector::*;
