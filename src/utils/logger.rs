//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, but adds file output capabilities.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

use crate::msg::{CoordinateMessage, Header};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Whether records are echoed to the console
    echo: bool,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let file = File::create(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            echo: true,
        })
    }

    /// Creates a logger that discards everything
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
            echo: false,
        }
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs the header and shape of a message in a formatted way
    ///
    /// # Arguments
    ///
    /// * `label` - Where the message came from or is going to
    /// * `message` - The message to describe
    pub fn log_message_summary(&self, label: &str, message: &CoordinateMessage) -> io::Result<()> {
        self.log(&format!("{} ({}):", label, message.kind().name()))?;
        self.log(&format!("  {}", describe_header(message.header())))?;

        match message {
            CoordinateMessage::Coordinate(msg) => {
                self.log(&format!("  Point: {},{}", msg.x, msg.y))?;
            }
            CoordinateMessage::CoordinateSet(msg) => {
                self.log(&format!("  Points: {}", msg.len()))?;
            }
            CoordinateMessage::CoordinateSets(msg) => {
                self.log(&format!("  Sets: {}, Points: {}", msg.len(), msg.point_count()))?;
                for (index, set) in msg.data.iter().enumerate() {
                    self.log(&format!("    Set #{}: {} points, {}",
                                      index, set.len(), describe_header(&set.header)))?;
                }
            }
        }

        Ok(())
    }

    /// Static method to initialize the global logger
    pub fn init_global_logger(log_file: &str) -> io::Result<()> {
        // Create a dedicated logger for the log crate
        let global_logger = Logger::new(log_file)?;

        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
        Ok(())
    }
}

fn describe_header(header: &Header) -> String {
    let frame = if header.frame_id.is_empty() { "<none>" } else { header.frame_id.as_str() };
    format!("Seq: {}, Stamp: {}, Frame: {}", header.seq, header.stamp, frame)
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // stdout is reserved for decoded points
            if self.echo {
                eprintln!("{}", message);
            }
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
