use crate::core::error::Result;
use crate::core::state::AppContext;
use crate::core::{print_success, sync, GithubClient};
use chrono::Utc;

/// Replace the cached candidate set wholesale from the configured repository
/// and re-sync the widget's candidate pool. Returns the new candidate count.
pub fn refresh_cache(ctx: &mut AppContext) -> Result<usize> {
    let client = GithubClient::new(ctx.config.clone());
    let candidates = client.fetch_tree()?;

    ctx.state.candidates = candidates;
    ctx.state.last_fetch = Some(Utc::now());

    if let Err(e) = ctx.state.save_candidates(&ctx.kv) {
        log::error!("failed to persist candidate cache: {e}");
    }
    if let Err(e) = ctx.state.save_last_fetch(&ctx.kv) {
        log::error!("failed to persist last-fetch stamp: {e}");
    }
    sync::sync_pool(&ctx.widget, &ctx.state.candidates, &ctx.state.selected_folder);

    Ok(ctx.state.candidates.len())
}

/// Ensure the candidate cache is populated, refreshing on a cache miss.
pub fn ensure_cache(ctx: &mut AppContext) -> Result<()> {
    if ctx.state.candidates.is_empty() {
        log::debug!("candidate cache empty, refreshing");
        refresh_cache(ctx)?;
    }
    Ok(())
}

pub fn execute_refresh() -> Result<()> {
    let mut ctx = AppContext::init()?;
    let count = refresh_cache(&mut ctx)?;
    print_success(&format!(
        "Cached {count} problems from {}\n",
        ctx.config.slug()
    ));
    Ok(())
}
