//! Drives a handful of systems through a few frames.
//!
//! Run with `RUST_LOG=trace cargo run --example frame_loop` to see registration and transition records.

use std::time::Duration;
use turbo_scheduler::prelude::*;

const CONFIG: &str = r#"
profile = true
trace_transitions = true

[systems.Gravity]
acceleration = -9.81
"#;

struct Health;

#[derive(Default, System)]
struct Gravity {
	acceleration: f64,
	velocity: f64,
}

impl System for Gravity {
	fn capabilities(&self) -> Capabilities {
		Capabilities::ON_START | Capabilities::ON_UPDATE
	}

	fn initialize(&mut self, config: Option<&SystemConfig>) {
		self.acceleration = config
			.and_then(|c| c.get("acceleration"))
			.and_then(|v| v.as_float())
			.unwrap_or(-1.0);
	}

	fn on_start(&mut self) {
		log::info!("Gravity starts pulling at {} m/s².", self.acceleration);
	}

	fn on_update(&mut self, delta_time: f32) {
		self.velocity += self.acceleration * delta_time as f64;
	}
}

#[derive(Default, System)]
struct Spawner {
	spawned: u32,
}

impl System for Spawner {
	fn capabilities(&self) -> Capabilities {
		Capabilities::ON_ENTITY_ADDED | Capabilities::ON_COMPONENT_ADDED | Capabilities::ON_ENTITY_REMOVED
	}

	fn on_entity_added(&mut self, entity: Entity, _collector: &dyn Collector) {
		self.spawned += 1;
		log::info!("Entity {} spawned ({} so far).", entity.index(), self.spawned);
	}

	fn on_component_added(&mut self, component: ComponentHandle, _collector: &dyn Collector) {
		log::info!("Entity {} gained component {}.", component.entity().index(), component.component().value());
	}

	fn on_entity_removed(&mut self, entity: Entity, _collector: &dyn Collector) {
		log::info!("Entity {} despawned.", entity.index());
	}
}

#[derive(Default, System)]
struct Hud;

impl System for Hud {
	fn capabilities(&self) -> Capabilities {
		Capabilities::ON_ENABLE | Capabilities::ON_DISABLE | Capabilities::ON_LATE_UPDATE
	}

	fn on_enable(&mut self) {
		log::info!("HUD shown.");
	}

	fn on_disable(&mut self) {
		log::info!("HUD hidden.");
	}

	fn on_late_update(&mut self, delta_time: f32) {
		log::info!("HUD redraw after {:.2} ms.", delta_time * 1000.0);
	}
}

fn main() -> Result<(), ConfigError> {
	env_logger::init();

	let config = ManagerConfig::from_toml_str(CONFIG)?;
	let mut manager = SystemManager::with_config(config);
	manager
		.pre_register::<Hud>(SystemOrder::LATE_UPDATE)
		.pre_register::<Spawner>(SystemOrder::BEGIN)
		.pre_register::<Gravity>(SystemOrder::FIXED_UPDATE);
	manager.pre_register_systems();

	let collector = ChangeCollector::shared();
	if let Some(spawner) = manager.get_system_mut::<Spawner>() {
		spawner.attach_collector(collector.clone());
	}

	let mut clock = FrameClock::new();
	for frame in 0..4u32 {
		clock.tick();

		{
			let mut changes = collector.borrow_mut();
			let entity = Entity::new(frame, 0);
			changes.entity_added(entity);
			changes.component_added(ComponentHandle::of::<Health>(entity));
			if frame > 0 {
				changes.entity_removed(Entity::new(frame - 1, 0));
			}
		}

		if frame == 2 {
			if let Some(hud) = manager.get_system_mut::<Hud>() {
				hud.set_enabled(false);
			}
		}

		manager.update(&clock);
		collector.borrow_mut().clear();

		for system in manager.systems() {
			log::info!("Frame {}: {} took {:?}.", clock.frame(), system.name(), system.delta_time());
		}

		std::thread::sleep(Duration::from_millis(16));
	}

	if let Some(gravity) = manager.get_system::<Gravity>().and_then(|s| s.downcast_ref::<Gravity>()) {
		log::info!("Final velocity: {:.3} m/s.", gravity.velocity);
	}

	Ok(())
}
