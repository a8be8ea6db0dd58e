use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        let formatted = self.format_line(file, line, message);
        match level {
            LogLevel::Info => println!("{}", formatted),
            LogLevel::Error => eprintln!("{}", formatted),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn log(level: LogLevel, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
        return;
    }

    // Persistence diagnostics must reach the operator even without a logger.
    match level {
        LogLevel::Error => eprintln!("[{}:{}] {}", file, line, message),
        LogLevel::Info => eprintln!("Logger not initialized! Call init_logger() first."),
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Error, file!(), line!(), &format!($($arg)*))
    };
}
