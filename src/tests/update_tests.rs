use crate::tests::support::{capture_logs, captured, take_events};
use crate::prelude::*;
use std::time::Duration;
use std::rc::Rc;
use log::Level;

recording_system!(Slow: on_update);
recording_system!(Fast: on_update);
recording_system!(Full:
	on_enable | on_disable | on_start
	| on_entity_added | on_component_added | on_component_removed | on_entity_removed
	| on_update | on_late_update
);
recording_system!(Starter: on_start | on_update);
recording_system!(Latecomer: on_start);
recording_system!(Plain: on_update);
recording_system!(Watcher: on_entity_added | on_component_added);
recording_system!(Observer: on_entity_added | on_component_added | on_component_removed | on_entity_removed);
recording_system!(ComponentsOnly: on_component_added);
recording_system!(Toggle: on_enable | on_disable);

struct Position;

#[derive(System)]
pub struct Heavy {
	clock: Rc<ManualClock>,
}

impl System for Heavy {
	fn capabilities(&self) -> Capabilities {
		Capabilities::ON_UPDATE | Capabilities::ON_LATE_UPDATE
	}

	fn on_update(&mut self, _delta_time: f32) {
		self.clock.advance(Duration::from_millis(3));
	}

	fn on_late_update(&mut self, _delta_time: f32) {
		self.clock.advance(Duration::from_millis(2));
	}
}

fn config(profile: bool, trace_transitions: bool) -> ManagerConfig {
	ManagerConfig {
		profile,
		trace_transitions,
		..ManagerConfig::default()
	}
}

#[test]
pub fn lower_orders_update_first() {
	let mut manager = SystemManager::new();
	manager.register::<Slow>(10);
	manager.register::<Fast>(5);
	take_events();

	manager.update(&ManualClock::new(0.5));
	assert_eq!(take_events(), vec!["Fast.on_update(0.5)", "Slow.on_update(0.5)"]);
}

#[test]
pub fn phases_run_in_sequence() {
	let collector = ChangeCollector::shared();
	let entity = Entity::new(1, 0);
	collector.borrow_mut().entity_added(entity);
	collector.borrow_mut().component_added(ComponentHandle::of::<Position>(entity));

	let mut manager = SystemManager::with_config(config(false, false));
	manager.register::<Full>(0).attach_collector(collector.clone());
	assert_eq!(take_events(), vec!["Full.initialize"]);

	manager.update(&ManualClock::new(1.0));
	assert_eq!(
		take_events(),
		vec![
			"Full.on_enable",
			"Full.on_start",
			"Full.on_entity_added(1)",
			"Full.on_component_added(1)",
			"Full.on_update(1)",
			"Full.on_late_update(1)",
		]
	);

	let full = manager.get_system::<Full>().expect("Registered system not found");
	assert!(full.is_applied_enabled(), "The enabled state should be applied at the end of the frame");
	assert!(full.is_started());
}

#[test]
pub fn enable_transitions() {
	let collector = ChangeCollector::shared();
	collector.borrow_mut().entity_added(Entity::new(4, 0));

	let mut manager = SystemManager::with_config(config(false, false));
	manager.register::<Full>(0).attach_collector(collector.clone());
	manager.update(&ManualClock::new(1.0));
	collector.borrow_mut().clear();
	take_events();

	// Steady state: no transition hooks.
	manager.update(&ManualClock::new(1.0));
	assert_eq!(take_events(), vec!["Full.on_update(1)", "Full.on_late_update(1)"]);

	manager.get_system_mut::<Full>().expect("Registered system not found").set_enabled(false);
	collector.borrow_mut().entity_removed(Entity::new(4, 0));
	manager.update(&ManualClock::new(1.0));
	assert_eq!(take_events(), vec!["Full.on_disable"], "Disabled systems must only see their disable hook");

	let full = manager.get_system::<Full>().expect("Registered system not found");
	assert!(!full.is_applied_enabled());

	manager.update(&ManualClock::new(1.0));
	assert!(take_events().is_empty(), "Disable must fire once");

	manager.get_system_mut::<Full>().expect("Registered system not found").set_enabled(true);
	collector.borrow_mut().clear();
	manager.update(&ManualClock::new(2.0));
	assert_eq!(
		take_events(),
		vec!["Full.on_enable", "Full.on_update(2)", "Full.on_late_update(2)"],
		"Re-enabled systems must not start again"
	);
	assert!(manager.get_system::<Full>().map_or(false, |s| s.is_applied_enabled()));
}

#[test]
pub fn undeclared_hooks_are_never_called() {
	let collector = ChangeCollector::shared();
	collector.borrow_mut().entity_added(Entity::new(2, 0));

	let mut manager = SystemManager::new();
	manager.register::<Plain>(0).attach_collector(collector.clone());
	take_events();

	manager.update(&ManualClock::new(0.25));
	manager.get_system_mut::<Plain>().expect("Registered system not found").set_enabled(false);
	manager.update(&ManualClock::new(0.25));
	manager.get_system_mut::<Plain>().expect("Registered system not found").set_enabled(true);
	manager.update(&ManualClock::new(0.25));

	assert_eq!(take_events(), vec!["Plain.on_update(0.25)", "Plain.on_update(0.25)"]);
}

#[test]
pub fn start_runs_once() {
	let mut manager = SystemManager::new();
	manager.register::<Starter>(0);
	take_events();

	manager.update(&ManualClock::new(1.0));
	assert_eq!(take_events(), vec!["Starter.on_start", "Starter.on_update(1)"]);

	manager.update(&ManualClock::new(1.0));
	assert_eq!(take_events(), vec!["Starter.on_update(1)"], "Start must not run twice");

	manager.register::<Latecomer>(5);
	take_events();

	manager.update(&ManualClock::new(1.0));
	assert_eq!(
		take_events(),
		vec!["Latecomer.on_start", "Starter.on_update(1)"],
		"Systems registered later should start on their first frame"
	);

	manager.update(&ManualClock::new(1.0));
	assert_eq!(take_events(), vec!["Starter.on_update(1)"]);
}

#[test]
pub fn reactive_changes_drain_by_kind() {
	let first = ChangeCollector::shared();
	let second = ChangeCollector::shared();
	first.borrow_mut().entity_added(Entity::new(1, 0));
	second.borrow_mut().entity_added(Entity::new(2, 0));
	second.borrow_mut().component_added(ComponentHandle::of::<Position>(Entity::new(2, 0)));

	let mut manager = SystemManager::new();
	let watcher = manager.register::<Watcher>(0);
	watcher.attach_collector(first.clone());
	watcher.attach_collector(second.clone());
	take_events();

	manager.update(&ManualClock::new(1.0));
	assert_eq!(
		take_events(),
		vec![
			"Watcher.on_entity_added(1)",
			"Watcher.on_entity_added(2)",
			"Watcher.on_component_added(2)",
		],
		"Every collector should be drained of one kind of change before the next kind"
	);
}

#[test]
pub fn reactive_kinds_are_ordered() {
	let collector = ChangeCollector::shared();
	{
		let mut collector = collector.borrow_mut();
		collector.entity_removed(Entity::new(4, 0));
		collector.component_removed(ComponentHandle::of::<Position>(Entity::new(3, 0)));
		collector.component_added(ComponentHandle::of::<Position>(Entity::new(2, 0)));
		collector.entity_added(Entity::new(1, 0));
	}

	let mut manager = SystemManager::new();
	manager.register::<Observer>(0).attach_collector(collector.clone());
	manager.register::<ComponentsOnly>(1).attach_collector(collector.clone());
	take_events();

	manager.update(&ManualClock::new(1.0));
	assert_eq!(
		take_events(),
		vec![
			"Observer.on_entity_added(1)",
			"Observer.on_component_added(2)",
			"Observer.on_component_removed(3)",
			"Observer.on_entity_removed(4)",
			"ComponentsOnly.on_component_added(2)",
		]
	);
}

#[test]
pub fn disabled_systems_receive_no_changes() {
	let collector = ChangeCollector::shared();
	collector.borrow_mut().entity_added(Entity::new(1, 0));

	let mut manager = SystemManager::new();
	let observer = manager.register::<Observer>(0);
	observer.attach_collector(collector.clone());
	observer.set_enabled(false);
	take_events();

	manager.update(&ManualClock::new(1.0));
	assert!(take_events().is_empty());
}

#[test]
pub fn profiling_measures_update_and_late_update() {
	let clock = Rc::new(ManualClock::new(1.0));

	let mut manager = SystemManager::with_config(config(true, false));
	manager.register_instance(Heavy { clock: clock.clone() }, 0, None);
	manager.register::<Plain>(1);

	manager.update(&*clock);
	let heavy = manager.get_system::<Heavy>().map(|s| s.delta_time());
	assert_eq!(heavy, Some(Duration::from_millis(5)));
	assert_eq!(manager.get_system::<Plain>().map(|s| s.delta_time()), Some(Duration::ZERO));

	manager.update(&*clock);
	let heavy = manager.get_system::<Heavy>().map(|s| s.delta_time());
	assert_eq!(heavy, Some(Duration::from_millis(5)), "Measurements must restart every frame");

	take_events();
}

#[test]
pub fn profiling_disabled_reports_zero() {
	let clock = Rc::new(ManualClock::new(1.0));

	let mut manager = SystemManager::with_config(config(false, false));
	manager.register_instance(Heavy { clock: clock.clone() }, 0, None);

	manager.update(&*clock);
	assert_eq!(manager.get_system::<Heavy>().map(|s| s.delta_time()), Some(Duration::ZERO));
	assert_eq!(clock.now(), Duration::from_millis(5));
}

#[test]
pub fn transitions_are_traced() {
	capture_logs();

	let mut manager = SystemManager::with_config(config(false, true));
	manager.register::<Toggle>(0);
	manager.update(&ManualClock::new(1.0));
	manager.get_system_mut::<Toggle>().expect("Registered system not found").set_enabled(false);
	manager.update(&ManualClock::new(1.0));

	assert_eq!(captured(Level::Debug), vec!["Toggle enabled.", "Toggle disabled."]);
	assert_eq!(take_events(), vec!["Toggle.initialize", "Toggle.on_enable", "Toggle.on_disable"]);

	capture_logs();

	let mut manager = SystemManager::with_config(config(false, false));
	manager.register::<Toggle>(0);
	manager.update(&ManualClock::new(1.0));
	assert!(captured(Level::Debug).is_empty(), "Transitions should only be traced on request");

	take_events();
}
