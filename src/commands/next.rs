use crate::core::error::Result;
use crate::core::state::AppContext;
use crate::core::{DailySelector, GithubClient};

pub fn execute_next() -> Result<()> {
    let mut ctx = AppContext::init()?;
    let mut selector = DailySelector::new();

    // Repository-list fetch failure on a cold start is terminal for this
    // transition; retry is the user running the command again.
    if let Err(e) = super::refresh::ensure_cache(&mut ctx) {
        selector.fail();
        return Err(e);
    }

    let client = GithubClient::new(ctx.config.clone());
    let current = selector.advance(&mut ctx, &client)?;

    super::show::render_current(&current);
    Ok(())
}
