use crate::systems::{Bucket, System, SystemId, SystemInstance, SystemOrder, SystemTypeInfo};
use crate::config::{ManagerConfig, PreRegisterOrder, SystemConfig};
use crate::data_structures::OrderedBucket;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use std::iter::FusedIterator;
use crate::time::Clock;
use std::time::Duration;
use std::slice::Iter;

type Hasher = BuildHasherDefault<NoHashHasher<usize>>;

/// A system waiting for [pre_register_systems](SystemManager::pre_register_systems).
struct PendingSystem {
	order: SystemOrder,
	name: &'static str,
	register: fn(&mut SystemManager, SystemOrder),
}

/// Owns every registered [System] and drives them through the frame phases.
///
/// Systems live in one master list sorted by [SystemOrder], plus one derived list per
/// [Bucket]. Each derived list is a sub-sequence of the master list.
///
/// The manager performs no synchronization; registration and updates must all happen
/// on the thread that owns it.
pub struct SystemManager {
	config: ManagerConfig,
	pending: Vec<PendingSystem>,

	instances: Vec<SystemInstance>,
	slots: HashMap<SystemId, usize, Hasher>,

	systems: OrderedBucket<SystemOrder, usize>,
	enable_or_disable: OrderedBucket<SystemOrder, usize>,
	start: OrderedBucket<SystemOrder, usize>,
	reactive: OrderedBucket<SystemOrder, usize>,
	update: OrderedBucket<SystemOrder, usize>,
	late_update: OrderedBucket<SystemOrder, usize>,
}

impl SystemManager {
	pub fn new() -> Self {
		Self::with_config(ManagerConfig::default())
	}

	pub fn with_config(config: ManagerConfig) -> Self {
		Self {
			config,
			pending: Vec::new(),

			instances: Vec::new(),
			slots: HashMap::default(),

			systems: OrderedBucket::new(),
			enable_or_disable: OrderedBucket::new(),
			start: OrderedBucket::new(),
			reactive: OrderedBucket::new(),
			update: OrderedBucket::new(),
			late_update: OrderedBucket::new(),
		}
	}

	pub fn config(&self) -> &ManagerConfig {
		&self.config
	}

	/// Queue a [System] to be registered by [pre_register_systems](SystemManager::pre_register_systems).
	/// Once any system has been registered the call is forwarded to [register](SystemManager::register).
	///
	/// # Arguments
	/// * `order` - The sort key of the system
	pub fn pre_register<T: System + SystemTypeInfo + Default>(
		&mut self, order: impl Into<SystemOrder>,
	) -> &mut Self {
		let order = order.into();

		if !self.systems.is_empty() {
			self.register::<T>(order);
			return self;
		}

		let pending = PendingSystem {
			order,
			name: T::type_name(),
			register: register_pending::<T>,
		};

		match self.config.pre_register_order {
			PreRegisterOrder::Registration => self.pending.push(pending),
			PreRegisterOrder::Reversed => self.pending.insert(0, pending),
		}

		self
	}

	/// Register every queued [System], lowest order first.
	/// Intended to be called once, before the first [update](SystemManager::update).
	pub fn pre_register_systems(&mut self) {
		let mut pending = std::mem::take(&mut self.pending);
		pending.sort_by_key(|p| p.order);

		for system in pending {
			log::trace!("Flushing pre-registered system {} at order {}.", system.name, system.order);
			(system.register)(self, system.order);
		}
	}

	/// Number of systems queued by [pre_register](SystemManager::pre_register).
	pub fn pending(&self) -> usize {
		self.pending.len()
	}

	/// Register a [System] created through its [Default] implementation.
	///
	/// If a system of this type is already registered a warning is logged and the existing
	/// instance is returned untouched. The system is initialized with its entry in
	/// [ManagerConfig::systems], if any.
	///
	/// # Arguments
	/// * `order` - The sort key of the system
	pub fn register<T: System + SystemTypeInfo + Default>(
		&mut self, order: impl Into<SystemOrder>,
	) -> &mut SystemInstance {
		self.register_with::<T>(order, None)
	}

	/// Same as [register](SystemManager::register), initializing the system with `config`
	/// instead of its entry in the manager configuration.
	pub fn register_with<T: System + SystemTypeInfo + Default>(
		&mut self, order: impl Into<SystemOrder>, config: Option<SystemConfig>,
	) -> &mut SystemInstance {
		if let Some(slot) = self.slots.get(&T::system_id()).copied() {
			return self.existing(slot);
		}

		self.insert(T::default(), order.into(), config)
	}

	/// Register an already constructed [System].
	/// On duplicates, `system` is dropped and the existing instance is returned.
	pub fn register_instance<T: System + SystemTypeInfo>(
		&mut self, system: T, order: impl Into<SystemOrder>, config: Option<SystemConfig>,
	) -> &mut SystemInstance {
		if let Some(slot) = self.slots.get(&T::system_id()).copied() {
			return self.existing(slot);
		}

		self.insert(system, order.into(), config)
	}

	pub fn get_system<T: SystemTypeInfo>(&self) -> Option<&SystemInstance> {
		self.get_system_by_id(T::system_id())
	}

	pub fn get_system_mut<T: SystemTypeInfo>(&mut self) -> Option<&mut SystemInstance> {
		let slot = *self.slots.get(&T::system_id())?;
		Some(&mut self.instances[slot])
	}

	pub fn get_system_by_id(&self, id: SystemId) -> Option<&SystemInstance> {
		self.slots.get(&id).map(|&slot| &self.instances[slot])
	}

	pub fn contains<T: SystemTypeInfo>(&self) -> bool {
		self.slots.contains_key(&T::system_id())
	}

	/// Every registered system, sorted by order.
	pub fn systems(&self) -> SystemIter<'_> {
		SystemIter::new(self.systems.values(), &self.instances)
	}

	/// The systems of one derived list, sorted by order.
	pub fn bucket(&self, bucket: Bucket) -> SystemIter<'_> {
		SystemIter::new(self.bucket_slots(bucket).values(), &self.instances)
	}

	pub fn len(&self) -> usize {
		self.instances.len()
	}

	pub fn is_empty(&self) -> bool {
		self.instances.is_empty()
	}

	/// Run one frame. Phases execute in a fixed sequence:
	/// enable, start, reactive, update, late-update and finally disable.
	pub fn update(&mut self, clock: &dyn Clock) {
		self.dispatch_enable();
		self.dispatch_start();
		self.dispatch_reactive();
		self.dispatch_update(clock);
		self.dispatch_late_update(clock);
		self.dispatch_disable();
	}

	fn existing(&mut self, slot: usize) -> &mut SystemInstance {
		let instance = &mut self.instances[slot];
		log::warn!("The system has been registered. {}", instance.name());
		instance
	}

	fn insert<T: System + SystemTypeInfo>(
		&mut self, system: T, order: SystemOrder, config: Option<SystemConfig>,
	) -> &mut SystemInstance {
		let slot = self.instances.len();
		let instance = SystemInstance::new(system, order);
		let capabilities = instance.capabilities();

		for bucket in Bucket::ALL {
			if bucket.accepts(capabilities) {
				self.bucket_slots_mut(bucket).insert(order, slot);
			}
		}

		self.systems.insert(order, slot);
		self.slots.insert(instance.id(), slot);
		self.instances.push(instance);

		log::trace!("Registered system {} at order {} with {:?}.", T::type_name(), order, capabilities);

		let config = config.as_ref().or_else(|| self.config.systems.get(T::type_name()));
		let instance = &mut self.instances[slot];
		instance.system.initialize(config);
		instance
	}

	fn bucket_slots(&self, bucket: Bucket) -> &OrderedBucket<SystemOrder, usize> {
		match bucket {
			Bucket::EnableOrDisable => &self.enable_or_disable,
			Bucket::Start => &self.start,
			Bucket::Reactive => &self.reactive,
			Bucket::Update => &self.update,
			Bucket::LateUpdate => &self.late_update,
		}
	}

	fn bucket_slots_mut(&mut self, bucket: Bucket) -> &mut OrderedBucket<SystemOrder, usize> {
		match bucket {
			Bucket::EnableOrDisable => &mut self.enable_or_disable,
			Bucket::Start => &mut self.start,
			Bucket::Reactive => &mut self.reactive,
			Bucket::Update => &mut self.update,
			Bucket::LateUpdate => &mut self.late_update,
		}
	}

	// Only observes the edge; the applied state catches up in dispatch_disable.
	fn dispatch_enable(&mut self) {
		for &slot in self.enable_or_disable.values() {
			let instance = &mut self.instances[slot];
			if instance.applied_enabled == instance.enabled
				|| !instance.enabled
				|| !instance.capabilities().has_on_enable()
			{
				continue;
			}

			instance.system.on_enable();

			if self.config.trace_transitions {
				log::debug!("{} enabled.", instance.name());
			}
		}
	}

	fn dispatch_start(&mut self) {
		for &slot in self.start.values() {
			let instance = &mut self.instances[slot];
			if instance.started {
				continue;
			}

			instance.system.on_start();
			instance.started = true;
		}
	}

	fn dispatch_reactive(&mut self) {
		macro_rules! drain {
			($instance: expr, $changes: ident, $hook: ident) => {
				paste::paste! {
					if $instance.capabilities().[<has_ $hook>]() {
						for collector in $instance.collectors.iter() {
							let collector = collector.borrow();
							for &change in collector.$changes() {
								$instance.system.$hook(change, &*collector);
							}
						}
					}
				}
			};
		}

		for &slot in self.reactive.values() {
			let instance = &mut self.instances[slot];
			if !instance.enabled {
				continue;
			}

			// Each kind of change is drained from every collector before the next kind.
			drain!(instance, added_entities, on_entity_added);
			drain!(instance, added_components, on_component_added);
			drain!(instance, removed_components, on_component_removed);
			drain!(instance, removed_entities, on_entity_removed);
		}
	}

	fn dispatch_update(&mut self, clock: &dyn Clock) {
		let profile = self.config.profile;
		let delta_time = clock.delta_time();

		if profile {
			for instance in self.instances.iter_mut() {
				instance.delta_time = Duration::ZERO;
			}
		}

		for &slot in self.update.values() {
			let instance = &mut self.instances[slot];
			if !instance.enabled {
				continue;
			}

			let start = profile.then(|| clock.now());
			instance.system.on_update(delta_time);

			if let Some(start) = start {
				instance.delta_time += clock.now().saturating_sub(start);
			}
		}
	}

	fn dispatch_late_update(&mut self, clock: &dyn Clock) {
		let profile = self.config.profile;
		let delta_time = clock.delta_time();

		for &slot in self.late_update.values() {
			let instance = &mut self.instances[slot];
			if !instance.enabled {
				continue;
			}

			let start = profile.then(|| clock.now());
			instance.system.on_late_update(delta_time);

			if let Some(start) = start {
				instance.delta_time += clock.now().saturating_sub(start);
			}
		}
	}

	fn dispatch_disable(&mut self) {
		for &slot in self.enable_or_disable.values() {
			let instance = &mut self.instances[slot];
			if instance.applied_enabled == instance.enabled {
				continue;
			}

			instance.applied_enabled = instance.enabled;

			if instance.enabled || !instance.capabilities().has_on_disable() {
				continue;
			}

			instance.system.on_disable();

			if self.config.trace_transitions {
				log::debug!("{} disabled.", instance.name());
			}
		}
	}
}

impl Default for SystemManager {
	fn default() -> Self {
		Self::new()
	}
}

fn register_pending<T: System + SystemTypeInfo + Default>(manager: &mut SystemManager, order: SystemOrder) {
	manager.register::<T>(order);
}

/// Iterates, in order, over the systems of a [SystemManager] list.
pub struct SystemIter<'l> {
	slots: Iter<'l, usize>,
	instances: &'l [SystemInstance],
}

impl<'l> SystemIter<'l> {
	fn new(slots: &'l [usize], instances: &'l [SystemInstance]) -> Self {
		Self {
			slots: slots.iter(),
			instances,
		}
	}
}

impl<'l> Iterator for SystemIter<'l> {
	type Item = &'l SystemInstance;

	fn next(&mut self) -> Option<Self::Item> {
		let instances = self.instances;
		self.slots.next().map(move |&slot| &instances[slot])
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.slots.size_hint()
	}
}

impl DoubleEndedIterator for SystemIter<'_> {
	fn next_back(&mut self) -> Option<Self::Item> {
		let instances = self.instances;
		self.slots.next_back().map(move |&slot| &instances[slot])
	}
}

impl ExactSizeIterator for SystemIter<'_> {}

impl FusedIterator for SystemIter<'_> {}
