use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    let ctx = AppContext::bootstrap(&cli)?;

    match cli.command {
        Command::List => commands::list::run(&ctx).await,
        Command::Resolve(args) => commands::resolve::run(&ctx, args).await,
        Command::Status => commands::status::run(&ctx).await,
        Command::Select => commands::select::run(&ctx).await,
        Command::Use(args) => commands::select::run_use(&ctx, args).await,
    }
}
