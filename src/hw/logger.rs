use log::{LevelFilter, Log, Metadata, Record};
use rtt_target::{rprintln, rtt_init_print};

/// Forwards `log` records to the RTT channel.
struct RttLogger;

impl Log for RttLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            rprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: RttLogger = RttLogger;

pub(crate) fn init(level: LevelFilter) {
    rtt_init_print!();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
