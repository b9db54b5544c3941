use log::{Level, Log, Metadata, Record};
use std::sync::Arc;

pub const LOG_TARGET: &str = "bulk_import";

/// Logger handle given to a client at construction time.
pub type ImportLogger = Arc<dyn Log>;

/// Forwards to whatever backend is installed through the `log` facade.
struct GlobalLogger;

impl Log for GlobalLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        log::logger().enabled(metadata)
    }

    fn log(&self, record: &Record) {
        log::logger().log(record)
    }

    fn flush(&self) {
        log::logger().flush()
    }
}

pub fn global_logger() -> ImportLogger {
    Arc::new(GlobalLogger)
}

pub(crate) fn emit(logger: &dyn Log, level: Level, message: &str) {
    let metadata = Metadata::builder().level(level).target(LOG_TARGET).build();
    if !logger.enabled(&metadata) {
        return;
    }
    logger.log(
        &Record::builder()
            .metadata(metadata)
            .args(format_args!("{}", message))
            .module_path_static(Some(module_path!()))
            .build(),
    );
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct CapturingLogger {
        pub records: Mutex<Vec<(Level, String)>>,
    }

    impl Log for CapturingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }
}

#[cfg(test)]
mod tests {
    use super::testing::CapturingLogger;
    use super::*;

    #[test]
    fn emit_goes_to_the_injected_logger() {
        let logger = CapturingLogger::default();
        emit(&logger, Level::Error, "Failed to get url: x, status code: 500");
        let records = logger.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, Level::Error);
        assert_eq!(records[0].1, "Failed to get url: x, status code: 500");
    }
}
