use serde::Serialize;

use crate::cli::UseArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::profile::service::CatalogProvider;
use crate::profile::{OpenDocument, ProfileService};
use crate::terminal::TerminalPresenter;

#[derive(Debug, Serialize)]
struct Selection {
    profile: Option<String>,
}

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let documents: Vec<OpenDocument> = Vec::new();
    let service = ProfileService::new(&ctx.catalog, &ctx.settings, &documents);
    let profile = service.select_profile(&TerminalPresenter, None).await?;

    let text = match profile.as_deref() {
        Some(name) => format!("configured profile: {name}"),
        None => "selection cancelled".to_string(),
    };
    ctx.output.emit(&text, &Selection { profile })
}

pub async fn run_use(ctx: &AppContext, args: UseArgs) -> AppResult<()> {
    let catalog = ctx.catalog.list_profiles().await?;
    if !catalog.contains(&args.name) {
        return Err(AppError::InvalidInput(format!(
            "unknown profile `{}`. run `cpyprofile list` to see available profiles",
            args.name
        )));
    }

    let documents: Vec<OpenDocument> = Vec::new();
    let service = ProfileService::new(&ctx.catalog, &ctx.settings, &documents);
    service.persist_choice(&args.name).await?;

    let text = format!("configured profile: {}", args.name);
    ctx.output.emit(
        &text,
        &Selection {
            profile: Some(args.name.clone()),
        },
    )
}
