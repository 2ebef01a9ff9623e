//! Message to text decoding command

use clap::ArgMatches;

use crate::api::CoordKit;
use crate::commands::command_traits::Command;
use crate::errors::CoordResult;

/// Command for decoding a message file into text points
pub struct DecodeCommand<'a> {
    /// Path to the message file
    input_file: String,
    /// Optional text output path; stdout when absent
    output_file: Option<String>,
    /// Library facade
    kit: &'a CoordKit,
}

impl<'a> DecodeCommand<'a> {
    /// Create a new decode command
    pub fn new(args: &ArgMatches, kit: &'a CoordKit) -> CoordResult<Self> {
        Ok(DecodeCommand {
            input_file: super::input_path(args)?,
            output_file: args.get_one::<String>("output").cloned(),
            kit,
        })
    }
}

impl<'a> Command for DecodeCommand<'a> {
    fn execute(&self) -> CoordResult<()> {
        self.kit.decode_file_to_text(&self.input_file, self.output_file.as_deref())
    }
}
