// log_capture.rs — records log output per test thread so assertions are not
// disturbed by tests running in parallel.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct ThreadCapture;

impl Log for ThreadCapture {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: ThreadCapture = ThreadCapture;
static INIT: Once = Once::new();

/// Run `f` and return its result together with every record it logged on
/// the current thread.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
    let out = f();
    let records = RECORDS.with(|r| r.borrow_mut().drain(..).collect());
    (out, records)
}

/// Messages of the captured records that start with `prefix`.
pub fn lines_starting_with<'a>(records: &'a [(Level, String)], prefix: &str) -> Vec<&'a str> {
    records
        .iter()
        .filter(|(_, msg)| msg.starts_with(prefix))
        .map(|(_, msg)| msg.as_str())
        .collect()
}
