use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(level);
        Ok(())
    }
}

// Everything goes to stderr, stdout is reserved for --json.
impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        match log::max_level() {
            LevelFilter::Off => (),
            LevelFilter::Error | LevelFilter::Warn | LevelFilter::Info => match record.level() {
                Level::Info => eprintln!("{}", record.args()),
                _ => eprintln!("{} {}", label(record.level()), record.args()),
            },
            LevelFilter::Debug | LevelFilter::Trace => {
                let location = match (record.file(), record.line()) {
                    (Some(file), Some(line)) => format!("[{}:{}]", file, line).dimmed(),
                    _ => "[unk]".dimmed(),
                };

                eprintln!(
                    "{} {} {} {}",
                    label(record.level()),
                    record.target().dimmed(),
                    location,
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

fn label(level: Level) -> ColoredString {
    match level {
        Level::Debug => "[DEBUG]".bold().blue(),
        Level::Error => "[ERROR]".bold().red(),
        Level::Info => "[INFO]".bold().green(),
        Level::Trace => "[TRACE]".bold().purple(),
        Level::Warn => "[WARN]".bold().yellow(),
    }
}
