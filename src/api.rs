use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::config::CoordConfig;
use crate::coordinate::{BoundingBox, Point};
use crate::errors::{CoordError, CoordResult};
use crate::io::byte_order::ByteOrder;
use crate::marshal::{Clock, Marshaller, SystemClock};
use crate::msg::{CoordinateMessage, CoordinateSets, MessageKind};
use crate::utils::logger::Logger;
use crate::utils::point_text;
use crate::utils::progress::ProgressTracker;
use crate::wire::{MessageReader, MessageWriter};

/// Main interface to the coordkit library
pub struct CoordKit<C: Clock = SystemClock> {
    logger: Logger,
    config: CoordConfig,
    marshaller: Marshaller<C>,
}

impl CoordKit<SystemClock> {
    /// Create a new CoordKit instance
    ///
    /// # Arguments
    /// * `config` - Settings to use; the log file is created from `config.log_file`
    ///
    /// # Returns
    /// A CoordKit instance or an error if the log file cannot be created
    pub fn new(config: CoordConfig) -> CoordResult<Self> {
        let logger = Logger::new(&config.log_file)?;
        Ok(CoordKit::with_parts(logger, config, SystemClock))
    }
}

impl<C: Clock> CoordKit<C> {
    /// Assemble a CoordKit from an existing logger and clock
    pub fn with_parts(logger: Logger, config: CoordConfig, clock: C) -> Self {
        let marshaller = Marshaller::with_clock(clock).with_frame_id(&config.frame_id);
        CoordKit {
            logger,
            config,
            marshaller,
        }
    }

    /// Marshaller used for all conversions
    pub fn marshaller(&self) -> &Marshaller<C> {
        &self.marshaller
    }

    /// Active configuration
    pub fn config(&self) -> &CoordConfig {
        &self.config
    }

    /// Encode point sets into a message of the requested kind
    ///
    /// A `Coordinate` needs exactly one point in total and a
    /// `CoordinateSet` at most one set.
    pub fn encode_point_sets(&self, sets: &[Vec<Point>], kind: MessageKind) -> CoordResult<CoordinateMessage> {
        match kind {
            MessageKind::Coordinate => {
                let mut points = sets.iter().flatten();
                match (points.next(), points.next()) {
                    (Some(point), None) => Ok(self.marshaller.encode_point(point).into()),
                    _ => Err(CoordError::GenericError(format!(
                        "A coordinate message needs exactly one point, found {}",
                        sets.iter().map(Vec::len).sum::<usize>()))),
                }
            }
            MessageKind::CoordinateSet => match sets {
                [] => Ok(self.marshaller.encode_point_set(&[]).into()),
                [set] => Ok(self.marshaller.encode_point_set(set).into()),
                _ => Err(CoordError::GenericError(format!(
                    "A coordinate set message holds one set, found {}", sets.len()))),
            },
            MessageKind::CoordinateSets => Ok(self.encode_list_with_progress(sets).into()),
        }
    }

    fn encode_list_with_progress(&self, sets: &[Vec<Point>]) -> CoordinateSets {
        let progress = if sets.len() >= self.config.progress_threshold.max(1) {
            ProgressTracker::new(sets.len() as u64, "Encoding point sets")
        } else {
            ProgressTracker::hidden()
        };

        let msg = self.marshaller.encode_point_set_list_with(sets, |_| progress.increment(1));
        progress.finish();
        msg
    }

    /// Decode any coordinate message into point sets
    ///
    /// A single coordinate becomes one set with one point; a coordinate set
    /// becomes one set.
    pub fn decode_message(&self, message: &CoordinateMessage) -> Vec<Vec<Point>> {
        match message {
            CoordinateMessage::Coordinate(msg) => vec![vec![self.marshaller.decode_point(msg)]],
            CoordinateMessage::CoordinateSet(msg) => vec![self.marshaller.decode_point_set(msg)],
            CoordinateMessage::CoordinateSets(msg) => self.marshaller.decode_point_set_list(msg),
        }
    }

    /// Read a text point file and write it as a message file
    ///
    /// # Arguments
    /// * `input_path` - Text file with one point set per line
    /// * `output_path` - Where to write the message file
    /// * `kind` - Message level to produce
    /// * `byte_order` - Byte order override; the configured one if `None`
    ///
    /// # Returns
    /// The message that was written
    pub fn encode_file(&self,
                       input_path: &str,
                       output_path: &str,
                       kind: MessageKind,
                       byte_order: Option<ByteOrder>) -> CoordResult<CoordinateMessage> {
        info!("Encoding {} into {} message {}", input_path, kind.name(), output_path);

        let text = fs::read_to_string(input_path)?;
        let sets = point_text::parse_point_sets(&text)?;
        debug!("Parsed {} point sets from {}", sets.len(), input_path);

        let message = self.encode_point_sets(&sets, kind)?;
        let writer = MessageWriter::new(byte_order.unwrap_or(self.config.byte_order));
        writer.write_file(output_path, &message)?;

        self.logger.log_message_summary(&format!("Wrote {}", output_path), &message)?;
        Ok(message)
    }

    /// Read a message file and return its points
    pub fn decode_file(&self, input_path: &str) -> CoordResult<Vec<Vec<Point>>> {
        let mut reader = MessageReader::new();
        let message = reader.load(input_path)?;
        self.logger.log_message_summary(&format!("Read {}", input_path), &message)?;

        let sets = self.decode_message(&message);
        info!("Decoded {} point sets from {}", sets.len(), input_path);
        Ok(sets)
    }

    /// Read a message file and write its points as text
    ///
    /// Writes to stdout when `output_path` is `None`.
    pub fn decode_file_to_text(&self, input_path: &str, output_path: Option<&str>) -> CoordResult<()> {
        let sets = self.decode_file(input_path)?;
        let text = point_text::format_point_sets(&sets);

        match output_path {
            Some(path) => {
                fs::write(path, text)?;
                info!("Wrote {} point sets to {}", sets.len(), path);
            }
            None => print!("{}", text),
        }
        Ok(())
    }

    /// Describe a message file: byte order, kind, headers, counts and extent
    pub fn inspect(&self, input_path: &str) -> CoordResult<String> {
        let mut reader = MessageReader::new();
        let message = reader.load(input_path)?;
        let byte_order = reader.byte_order().unwrap_or_default();
        self.logger.log_message_summary(&format!("Inspected {}", input_path), &message)?;

        let mut result = String::from("Coordinate Message Summary:\n");
        result.push_str(&format!("  File: {}\n", Path::new(input_path).display()));
        result.push_str(&format!("  Byte order: {}\n", byte_order.name()));
        result.push_str(&format!("  Kind: {}\n", message.kind().name()));

        let header = message.header();
        result.push_str(&format!("  Seq: {}\n", header.seq));
        result.push_str(&format!("  Stamp: {}\n", header.stamp));
        if !header.frame_id.is_empty() {
            result.push_str(&format!("  Frame: {}\n", header.frame_id));
        }

        if let CoordinateMessage::CoordinateSets(msg) = &message {
            result.push_str(&format!("  Sets: {}\n", msg.len()));
            for (i, set) in msg.data.iter().enumerate() {
                result.push_str(&format!("    Set #{}: {} points (stamp: {})\n", i, set.len(), set.header.stamp));
            }
        }

        let sets = self.decode_message(&message);
        let point_count: usize = sets.iter().map(Vec::len).sum();
        result.push_str(&format!("  Points: {}\n", point_count));

        match BoundingBox::from_points(sets.iter().flatten()) {
            Some(bbox) => {
                result.push_str(&format!("  Extent: ({}, {}) - ({}, {})\n",
                                         bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y));
                result.push_str(&format!("  Size: {} x {}\n", bbox.width(), bbox.height()));
                result.push_str(&format!("  Center: {}\n", bbox.center()));
            }
            None => result.push_str("  Extent: empty\n"),
        }

        Ok(result)
    }
}
