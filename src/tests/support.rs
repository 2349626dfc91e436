use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

thread_local! {
	static EVENTS: RefCell<Vec<String>> = RefCell::new(Vec::new());
	static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

/// Append to the calling test's event log.
pub fn record(event: impl Into<String>) {
	EVENTS.with(|events| events.borrow_mut().push(event.into()));
}

/// Drain the calling test's event log.
pub fn take_events() -> Vec<String> {
	EVENTS.with(|events| std::mem::take(&mut *events.borrow_mut()))
}

struct CaptureLogger;

impl Log for CaptureLogger {
	fn enabled(&self, _: &Metadata) -> bool {
		true
	}

	fn log(&self, record: &Record) {
		RECORDS.with(|records| {
			records.borrow_mut().push((record.level(), record.args().to_string()));
		});
	}

	fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT_LOGGER: Once = Once::new();

/// Route log records emitted on the calling thread into a per-thread buffer.
pub fn capture_logs() {
	INIT_LOGGER.call_once(|| {
		if log::set_logger(&LOGGER).is_ok() {
			log::set_max_level(LevelFilter::Trace);
		}
	});
	RECORDS.with(|records| records.borrow_mut().clear());
}

pub fn captured(level: Level) -> Vec<String> {
	RECORDS.with(|records| {
		records.borrow().iter().filter(|(l, _)| *l == level).map(|(_, m)| m.clone()).collect()
	})
}

/// Declare a system that records every hook it receives, while only declaring the listed ones.
///
/// `recording_system!(Physics: on_update | on_late_update);`
macro_rules! recording_system {
    ($name: ident $(: $($hook: ident)|+)?) => {
        paste::paste! {
            #[derive(Default, $crate::systems::System)]
            pub struct $name;

            impl $crate::systems::System for $name {
                fn capabilities(&self) -> $crate::systems::Capabilities {
                    $crate::systems::Capabilities::empty()
                        $($(| $crate::systems::Capabilities::[<$hook:upper>])+)?
                }

                fn initialize(&mut self, _config: Option<&$crate::config::SystemConfig>) {
                    $crate::tests::support::record(format!("{}.initialize", stringify!($name)));
                }

                fn on_enable(&mut self) {
                    $crate::tests::support::record(format!("{}.on_enable", stringify!($name)));
                }

                fn on_disable(&mut self) {
                    $crate::tests::support::record(format!("{}.on_disable", stringify!($name)));
                }

                fn on_start(&mut self) {
                    $crate::tests::support::record(format!("{}.on_start", stringify!($name)));
                }

                fn on_entity_added(
                    &mut self, entity: $crate::entities::Entity, _: &dyn $crate::entities::Collector,
                ) {
                    $crate::tests::support::record(
                        format!("{}.on_entity_added({})", stringify!($name), entity.index())
                    );
                }

                fn on_component_added(
                    &mut self, component: $crate::entities::ComponentHandle, _: &dyn $crate::entities::Collector,
                ) {
                    $crate::tests::support::record(
                        format!("{}.on_component_added({})", stringify!($name), component.entity().index())
                    );
                }

                fn on_component_removed(
                    &mut self, component: $crate::entities::ComponentHandle, _: &dyn $crate::entities::Collector,
                ) {
                    $crate::tests::support::record(
                        format!("{}.on_component_removed({})", stringify!($name), component.entity().index())
                    );
                }

                fn on_entity_removed(
                    &mut self, entity: $crate::entities::Entity, _: &dyn $crate::entities::Collector,
                ) {
                    $crate::tests::support::record(
                        format!("{}.on_entity_removed({})", stringify!($name), entity.index())
                    );
                }

                fn on_update(&mut self, delta_time: f32) {
                    $crate::tests::support::record(
                        format!("{}.on_update({})", stringify!($name), delta_time)
                    );
                }

                fn on_late_update(&mut self, delta_time: f32) {
                    $crate::tests::support::record(
                        format!("{}.on_late_update({})", stringify!($name), delta_time)
                    );
                }
            }
        }
    };
}
