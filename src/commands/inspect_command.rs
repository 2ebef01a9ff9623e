//! Message file inspection command
//!
//! This module implements the command for displaying the headers,
//! shape and extent of a coordinate message file.

use clap::ArgMatches;
use log::{debug, info};

use crate::api::CoordKit;
use crate::commands::command_traits::Command;
use crate::errors::CoordResult;

/// Command for inspecting a message file
pub struct InspectCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Whether to enable verbose output
    verbose: bool,
    /// Library facade
    kit: &'a CoordKit,
}

impl<'a> InspectCommand<'a> {
    /// Create a new inspect command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Library facade to run against
    ///
    /// # Returns
    /// A new InspectCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a CoordKit) -> CoordResult<Self> {
        Ok(InspectCommand {
            input_file: super::input_path(args)?,
            verbose: args.get_flag("verbose"),
            kit,
        })
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> CoordResult<()> {
        let summary = self.kit.inspect(&self.input_file)?;
        for line in summary.lines() {
            info!("{}", line);
        }

        if self.verbose {
            let sets = self.kit.decode_file(&self.input_file)?;
            for (index, set) in sets.iter().enumerate() {
                debug!("Set #{}: {}", index, crate::utils::point_text::format_point_line(set));
            }
        }

        Ok(())
    }
}
