use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;
use crate::profile::service::CatalogProvider;
use crate::profile::{ProfileCatalog, present_choices};

#[derive(Debug, Serialize)]
struct ProfileRow<'a> {
    name: &'a str,
    user: &'a str,
    host: &'a str,
    port: u16,
    default: bool,
}

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let catalog = ctx.catalog.list_profiles().await?;
    let default_name = ctx.catalog.default_profile_name();

    if ctx.output.mode() == OutputMode::Text {
        if catalog.is_empty() {
            println!(
                "0 profiles. add some to {}",
                ctx.paths.profiles_file().display()
            );
            return Ok(());
        }

        for (index, item) in present_choices(&catalog, default_name.as_deref())
            .iter()
            .enumerate()
        {
            let marker = if default_name.as_deref() == Some(item.label.as_str()) {
                " (default)"
            } else {
                ""
            };
            println!("{}. {} {}{}", index + 1, item.label, item.description, marker);
        }

        return Ok(());
    }

    let rows = rows(&catalog, default_name.as_deref());
    let text = format!("{} profiles", rows.len());
    ctx.output.emit(&text, &rows)
}

fn rows<'a>(catalog: &'a ProfileCatalog, default_name: Option<&str>) -> Vec<ProfileRow<'a>> {
    catalog
        .iter()
        .map(|(name, profile)| ProfileRow {
            name,
            user: &profile.user,
            host: &profile.host,
            port: profile.port,
            default: default_name == Some(name),
        })
        .collect()
}
