use clap::Args;
use eyre::Result;
use makeset_codegen_rust::Generator;

use super::{ConfigSource, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub source: ConfigSource,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let spec = self.source.load().unwrap_or_exit();
        // Surface fragment errors too; nothing is written.
        Generator::new(&spec).render().unwrap_or_exit();
        let report = ops::check(&spec, &self.source.display_name());
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
