use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Routes `log` records to the browser console and panics to `console.error`.
///
/// Idempotent; only the first call installs anything. The level can be
/// lowered or raised afterwards with [`log::set_max_level`].
pub fn init_logging(level: LevelFilter) {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        // Another logger may already be installed (e.g. by a test harness).
        if console_log::init_with_level(log::Level::Trace).is_err() {
            return;
        }
        log::debug!("logging initialized");
    });
    log::set_max_level(level);
}
