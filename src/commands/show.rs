use crate::core::error::Result;
use crate::core::problem::{CurrentProblem, METADATA_DEFAULT};
use crate::core::state::AppContext;
use crate::core::{print_section_header, DailySelector, GithubClient};
use colored::*;

/// Number of content lines shown as the preview snippet.
const PREVIEW_LINES: usize = 15;

pub fn execute_show() -> Result<()> {
    let mut ctx = AppContext::init()?;

    // First run with an empty cache: populate it so a forced advance inside
    // reconcile has candidates to pick from. A failed refresh is tolerable
    // here if a stored problem can still be loaded.
    if ctx.state.candidates.is_empty() {
        if let Err(e) = super::refresh::refresh_cache(&mut ctx) {
            log::warn!("cache refresh failed, proceeding with stored state: {e}");
        }
    }

    let client = GithubClient::new(ctx.config.clone());
    let mut selector = DailySelector::new();
    let current = selector.reconcile_on_load(&mut ctx, &client)?;

    render_current(&current);
    Ok(())
}

/// Render a current-problem record: header, badges, metadata, code preview.
pub fn render_current(current: &CurrentProblem) {
    let problem = &current.problem;

    print_section_header("Current problem");
    println!("   {}", problem.name.white().bold());
    if !current.repo_name.is_empty() {
        println!("   {}", current.repo_name.bright_black());
    }
    println!(
        "   {} {} {}{}",
        format!("[{}]", problem.difficulty).blue(),
        format!("[{}]", problem.topic).blue(),
        problem.path.bright_black(),
        if problem.seen {
            format!(" {}", "(seen)".yellow())
        } else {
            String::new()
        }
    );

    if problem.intuition != METADATA_DEFAULT {
        println!("   {} {}", "Intuition:".blue(), problem.intuition.white());
    }
    if problem.technique != METADATA_DEFAULT {
        println!("   {} {}", "Technique:".blue(), problem.technique.white());
    }
    if problem.time_complexity != METADATA_DEFAULT || problem.space_complexity != METADATA_DEFAULT {
        println!(
            "   {} Time: {} | Space: {}",
            "Complexity:".blue(),
            problem.time_complexity.white(),
            problem.space_complexity.white()
        );
    }

    println!("\n{}", "Preview:".white());
    for line in current.code.lines().take(PREVIEW_LINES) {
        println!("   {}", line.bright_black());
    }
    println!();
}
