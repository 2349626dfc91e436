use std::fmt::{Display, Formatter};

/// The sort key of a registered system. Lower orders run first in every phase;
/// systems sharing an order run in registration order.
///
/// The named anchors leave room for systems to be slotted in between them.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct SystemOrder(pub i32);

impl SystemOrder {
	pub const BEGIN: SystemOrder = SystemOrder(0);
	pub const ENABLE: SystemOrder = SystemOrder(1000);
	pub const START: SystemOrder = SystemOrder(2000);
	pub const FIXED_UPDATE: SystemOrder = SystemOrder(3000);
	pub const UPDATE: SystemOrder = SystemOrder(4000);
	pub const ANIMATION: SystemOrder = SystemOrder(5000);
	pub const RENDERER: SystemOrder = SystemOrder(6000);
	pub const LATE_UPDATE: SystemOrder = SystemOrder(7000);
	pub const DISABLE: SystemOrder = SystemOrder(8000);
	pub const END: SystemOrder = SystemOrder(9000);

	#[inline(always)]
	pub const fn value(self) -> i32 {
		self.0
	}

	/// An order `by` steps after (or before, when negative) this one.
	pub const fn offset(self, by: i32) -> SystemOrder {
		SystemOrder(self.0 + by)
	}
}

impl Default for SystemOrder {
	fn default() -> Self {
		Self::UPDATE
	}
}

impl From<i32> for SystemOrder {
	fn from(value: i32) -> Self {
		SystemOrder(value)
	}
}

impl Display for SystemOrder {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}
