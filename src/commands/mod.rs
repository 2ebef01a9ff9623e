//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod decode_command;
pub mod encode_command;
pub mod inspect_command;

pub use command_traits::{Command, CommandFactory};
pub use decode_command::DecodeCommand;
pub use encode_command::EncodeCommand;
pub use inspect_command::InspectCommand;

use clap::ArgMatches;
use crate::api::CoordKit;
use crate::errors::{CoordError, CoordResult};

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
#[derive(Default)]
pub struct CoordkitCommandFactory;

impl CoordkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CoordkitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for CoordkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: &'a CoordKit) -> CoordResult<Box<dyn Command + 'a>> {
        if args.get_flag("encode") {
            Ok(Box::new(EncodeCommand::new(args, kit)?))
        } else if args.get_flag("decode") {
            Ok(Box::new(DecodeCommand::new(args, kit)?))
        } else {
            // Default to inspect command
            Ok(Box::new(InspectCommand::new(args, kit)?))
        }
    }
}

/// Fetch the required positional input path
pub(crate) fn input_path(args: &ArgMatches) -> CoordResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| CoordError::GenericError("Missing input file".to_string()))
}
