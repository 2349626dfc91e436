use std::fmt::{Debug, Formatter};
use std::ops::{BitOr, BitOrAssign};
use paste::paste;

/// The set of optional hooks a [System](crate::systems::System) implements.
///
/// Queried once, when the system is registered. Only declared hooks are ever dispatched.
#[derive(Default, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Capabilities {
	bits: u16,
}

macro_rules! declare_capabilities {
    ($($hook: ident = $bit: expr),* $(,)?) => {
        paste! {
            impl Capabilities {
                $(
                    #[doc = "The system implements `" $hook "`."]
                    pub const [<$hook:upper>]: Capabilities = Capabilities { bits: 1 << $bit };
                )*

                const NAMED: &'static [(&'static str, Capabilities)] = &[
                    $((stringify!($hook), Self::[<$hook:upper>])),*
                ];

                $(
                    #[inline(always)]
                    pub const fn [<has_ $hook>](&self) -> bool {
                        self.intersects(Self::[<$hook:upper>])
                    }
                )*
            }
        }
    };
}

declare_capabilities!(
	on_enable = 0,
	on_disable = 1,
	on_start = 2,
	on_entity_added = 3,
	on_component_added = 4,
	on_component_removed = 5,
	on_entity_removed = 6,
	on_update = 7,
	on_late_update = 8,
);

impl Capabilities {
	pub const ENABLE_OR_DISABLE: Capabilities = Self::ON_ENABLE.union(Self::ON_DISABLE);
	pub const REACTIVE: Capabilities = Self::ON_ENTITY_ADDED
		.union(Self::ON_COMPONENT_ADDED)
		.union(Self::ON_COMPONENT_REMOVED)
		.union(Self::ON_ENTITY_REMOVED);

	pub const fn empty() -> Self {
		Self { bits: 0 }
	}

	pub const fn union(self, other: Capabilities) -> Self {
		Self {
			bits: self.bits | other.bits,
		}
	}

	/// Whether every hook of `other` is in this set.
	pub const fn contains(&self, other: Capabilities) -> bool {
		self.bits & other.bits == other.bits
	}

	/// Whether at least one hook of `other` is in this set.
	pub const fn intersects(&self, other: Capabilities) -> bool {
		self.bits & other.bits != 0
	}

	pub const fn is_empty(&self) -> bool {
		self.bits == 0
	}
}

impl BitOr for Capabilities {
	type Output = Capabilities;

	fn bitor(self, rhs: Self) -> Self::Output {
		self.union(rhs)
	}
}

impl BitOrAssign for Capabilities {
	fn bitor_assign(&mut self, rhs: Self) {
		*self = self.union(rhs);
	}
}

impl Debug for Capabilities {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut names = Self::NAMED.iter().filter(|(_, c)| self.contains(*c)).map(|(n, _)| *n);
		write!(f, "Capabilities(")?;
		if let Some(first) = names.next() {
			write!(f, "{}", first)?;
			for name in names {
				write!(f, " | {}", name)?;
			}
		}
		write!(f, ")")
	}
}

/// A derived phase list of a [SystemManager](crate::systems::SystemManager).
///
/// Each bucket holds, in master order, the systems declaring at least one of its hooks.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Bucket {
	EnableOrDisable,
	Start,
	Reactive,
	Update,
	LateUpdate,
}

impl Bucket {
	pub const ALL: [Bucket; 5] = [
		Bucket::EnableOrDisable,
		Bucket::Start,
		Bucket::Reactive,
		Bucket::Update,
		Bucket::LateUpdate,
	];

	/// The hooks that make a system a member of this bucket.
	pub const fn mask(self) -> Capabilities {
		match self {
			Bucket::EnableOrDisable => Capabilities::ENABLE_OR_DISABLE,
			Bucket::Start => Capabilities::ON_START,
			Bucket::Reactive => Capabilities::REACTIVE,
			Bucket::Update => Capabilities::ON_UPDATE,
			Bucket::LateUpdate => Capabilities::ON_LATE_UPDATE,
		}
	}

	pub const fn accepts(self, capabilities: Capabilities) -> bool {
		capabilities.intersects(self.mask())
	}
}
