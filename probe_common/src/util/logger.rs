use core::fmt::Write;
use log::{Record, Level, LevelFilter, Metadata};
use spin::Mutex;

/// [`log`] backend that writes one line per record into any [`Write`] sink,
/// e.g. a serial port
pub struct Logger<W: Write + Send> {
    sink: Mutex<W>,
    colors: bool,
}

impl<W: Write + Send> Logger<W> {
    pub fn new(sink: W) -> Logger<W> {
        Logger { sink: Mutex::new(sink), colors: true }
    }

    #[cfg(test)]
    fn plain(sink: W) -> Logger<W> {
        Logger { sink: Mutex::new(sink), colors: false }
    }

    #[cfg(test)]
    fn into_sink(self) -> W {
        self.sink.into_inner()
    }

    const fn get_level_string(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1b[31m", "err"), // red
            Level::Warn =>  ("\x1b[33m", "wrn"), // yellow
            Level::Info =>  ("\x1b[34m", "nfo"), // blue
            Level::Debug => ("\x1b[35m", "dbg"), // magenta
            Level::Trace => ("\x1b[37m", "trc"), // white
        }
    }
}

impl<W: Write + Send> log::Log for Logger<W> {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let (color, level) = Self::get_level_string(record.level());
        let (color, mod_color, reset) = if self.colors {
            (color, "\x1b[38;5;238m", "\x1b[0;0m")
        } else {
            ("", "", "")
        };
        let args = record.args();

        let mut guard = self.sink.lock();
        // a logger has nowhere to report its own failures
        let _ = match (record.module_path(), record.line()) {
            (Some(module), Some(line)) => {
                let module = module.rsplit("::").next().unwrap_or(module);
                guard.write_fmt(format_args!("[{color}{level} {mod_color}{module}:{line}{reset}] {args}\r\n"))
            },
            (Some(module), None) =>
                guard.write_fmt(format_args!("[{color}{level} {mod_color}{module}{reset}] {args}\r\n")),
            _ =>
                guard.write_fmt(format_args!("[{color}{level}{reset}] {args}\r\n")),
        };
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "x86_64")]
static SERIAL_LOGGER: spin::Once<Logger<crate::target::current::serial::SerialPort>> = spin::Once::new();

/// Installs a colored [`Logger`] writing to the given serial port as the
/// global logger. Returns `false` if there's no such port or another logger
/// has already been installed; the max level is applied either way.
#[cfg(target_arch = "x86_64")]
pub fn init_serial(port_number: usize, level: LevelFilter) -> bool {
    use crate::target::current::serial::{SerialPort, IfPort};

    let installed = match SerialPort::new(port_number) {
        Some(port) => log::set_logger(SERIAL_LOGGER.call_once(|| Logger::new(port))).is_ok(),
        None => false,
    };
    log::set_max_level(level);
    installed
}
