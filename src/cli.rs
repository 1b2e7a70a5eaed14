use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "cpyprofile",
    version,
    about = "Resolve the connection profile used for copybook lookups"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Configuration directory override")]
    pub config_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    List,
    Resolve(ResolveArgs),
    Status,
    Select,
    Use(UseArgs),
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[arg(help = "Program file name, e.g. PAYROLL.cbl")]
    pub program: String,
    #[arg(long = "open", action = ArgAction::Append, help = "Open document path (repeatable, in tab order)")]
    pub open: Vec<String>,
}

#[derive(Debug, Args)]
pub struct UseArgs {
    #[arg(help = "Profile name to configure")]
    pub name: String,
}
