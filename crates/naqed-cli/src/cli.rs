use clap::{Arg, ArgAction};

use crate::{cli_generate, logging};

pub struct Cli {
    cmd: clap::Command,
}

impl Cli {
    pub fn new() -> eyre::Result<Self> {
        Ok(Self {
            cmd: clap::Command::new("naqed")
                .about("Generates GraphQL SDL from naqed specifications")
                .subcommand_required(true)
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .short('v')
                        .global(true)
                        .action(ArgAction::SetTrue),
                )
                .subcommand(cli_generate::GenerateCommand::new_cmd()),
        })
    }

    pub fn execute(self, args: &[&str]) -> eyre::Result<()> {
        let matches = self.cmd.get_matches_from(args);

        logging::init(matches.get_flag("verbose"))?;

        match matches.subcommand() {
            Some(("generate", args)) => cli_generate::GenerateCommand::exec(args)?,
            _ => eyre::bail!("command missing"),
        }

        Ok(())
    }
}
