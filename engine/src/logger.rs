use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    verbose: bool,
}

impl Logger {
    fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        println!("[{}][{}:{}] {}", timestamp, file_name, line, message);
    }

    pub fn debug(&self, file: &str, line: u32, message: &str) {
        if self.verbose {
            self.log(file, line, message);
        }
    }
}

pub fn init_logger(verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(verbose));
}

pub fn debug(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.debug(file, line, message);
    }
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logger::debug(file!(), line!(), &format!($($arg)*))
    };
}
