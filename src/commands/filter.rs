use crate::core::error::Result;
use crate::core::state::AppContext;
use crate::core::{filter, print_info, print_section_header, print_success, problem, sync};
use colored::*;

pub fn execute_filter(folder: Option<String>) -> Result<()> {
    let mut ctx = AppContext::init()?;

    let Some(folder) = folder else {
        print_info(&format!("Active folder filter: {}", ctx.state.selected_folder));
        return Ok(());
    };

    ctx.state.selected_folder = folder;
    ctx.state.save_selected_folder(&ctx.kv)?;

    // Filter changes are never lazy with respect to the widget surface.
    sync::sync_pool(&ctx.widget, &ctx.state.candidates, &ctx.state.selected_folder);

    let matching = ctx.state.filtered().len();
    print_success(&format!(
        "Folder filter set to '{}' ({matching} matching problems)\n",
        ctx.state.selected_folder
    ));
    Ok(())
}

pub fn execute_folders() -> Result<()> {
    let ctx = AppContext::init()?;

    if ctx.state.candidates.is_empty() {
        print_info("No cached problems. Run 'problem-rotator refresh' first.");
        return Ok(());
    }

    let folders = problem::extract_folders(&ctx.state.candidates);
    print_section_header("Available folders");
    println!("   {}", filter::ALL.white());
    for folder in folders {
        let marker = if folder == ctx.state.selected_folder {
            " (active)".yellow().to_string()
        } else {
            String::new()
        };
        println!("   {}{marker}", folder.white());
    }
    println!();
    Ok(())
}
