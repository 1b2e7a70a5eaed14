use serde::Serialize;

use crate::cli::ResolveArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::profile::{OpenDocument, ProfileService};

#[derive(Debug, Serialize)]
struct Resolution<'a> {
    program: &'a str,
    profile: Option<String>,
}

pub async fn run(ctx: &AppContext, args: ResolveArgs) -> AppResult<()> {
    let documents: Vec<OpenDocument> = args.open.into_iter().map(OpenDocument::new).collect();
    let service = ProfileService::new(&ctx.catalog, &ctx.settings, &documents);
    let profile = service.resolve_for_program(&args.program).await?;

    let text = match profile.as_deref() {
        Some(name) => format!("{}: {name}", args.program),
        None => format!("{}: no profile found. run `cpyprofile select`", args.program),
    };
    let resolution = Resolution {
        program: &args.program,
        profile,
    };
    ctx.output.emit(&text, &resolution)
}
