//! Text to message encoding command
//!
//! Reads point sets from a text file and writes them as a
//! coordinate message file.

use clap::ArgMatches;
use log::info;

use crate::api::CoordKit;
use crate::commands::command_traits::Command;
use crate::errors::{CoordError, CoordResult};
use crate::io::byte_order::ByteOrder;
use crate::msg::MessageKind;

/// Command for encoding text points into a message file
pub struct EncodeCommand<'a> {
    /// Path to the text input
    input_file: String,
    /// Path to the message file to write
    output_file: String,
    /// Message level to produce
    kind: MessageKind,
    /// Byte order override
    byte_order: Option<ByteOrder>,
    /// Library facade
    kit: &'a CoordKit,
}

impl<'a> EncodeCommand<'a> {
    /// Create a new encode command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade to run against
    ///
    /// # Returns
    /// A new EncodeCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a CoordKit) -> CoordResult<Self> {
        let input_file = super::input_path(args)?;

        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| CoordError::GenericError("Missing output file path for encoding".to_string()))?
            .clone();

        let level = args.get_one::<String>("level").map(String::as_str).unwrap_or("sets");
        let kind = MessageKind::from_level(level)
            .ok_or_else(|| CoordError::GenericError(format!("Unknown message level: {}", level)))?;

        let byte_order = match args.get_one::<String>("byte-order") {
            Some(name) => Some(ByteOrder::from_name(name)
                .ok_or_else(|| CoordError::GenericError(format!("Unknown byte order: {}", name)))?),
            None => None,
        };

        Ok(EncodeCommand {
            input_file,
            output_file,
            kind,
            byte_order,
            kit,
        })
    }
}

impl<'a> Command for EncodeCommand<'a> {
    fn execute(&self) -> CoordResult<()> {
        let message = self.kit.encode_file(&self.input_file, &self.output_file, self.kind, self.byte_order)?;
        info!("Encoded {} message with stamp {} to {}",
              message.kind().name(), message.header().stamp, self.output_file);
        Ok(())
    }
}
