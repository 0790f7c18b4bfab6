use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use makeset_codegen_rust::Generator;

use super::{ConfigSource, UnwrapOrExit};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub source: ConfigSource,

    /// Directory that receives `<package>.rs` and `<package>/tests.rs`
    #[arg(short, long)]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let spec = self.source.load().unwrap_or_exit();
        let specialization = Generator::new(&spec).render().unwrap_or_exit();

        let report = ops::generate(
            &spec,
            &specialization,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
