use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::indicator::{IndicatorState, Synchronizer};
use crate::terminal::ConsoleIndicator;

#[derive(Debug, Serialize)]
struct Status<'a> {
    text: &'a str,
}

pub async fn run(ctx: &AppContext) -> AppResult<()> {
    let mut state = IndicatorState::create(ConsoleIndicator::default());
    let synchronizer = Synchronizer::new(&ctx.catalog, &ctx.settings);

    let refreshed = synchronizer.refresh(&mut state).await;
    let emitted = refreshed.and_then(|()| {
        let text = state.text();
        ctx.output.emit(text, &Status { text })
    });

    state.dispose();
    emitted
}
