use crate::core::error::Result;
use crate::core::state::AppContext;
use crate::core::{print_info, print_section_header};
use colored::*;

pub fn execute_history() -> Result<()> {
    let ctx = AppContext::init()?;

    if ctx.state.history.is_empty() {
        print_info("No problems in history yet.");
        return Ok(());
    }

    print_section_header("History (most recent first)");
    for (index, problem) in ctx.state.history.entries().iter().enumerate() {
        println!(
            "   {} {} {}",
            format!("[{}]", index + 1).blue(),
            problem.name.white(),
            format!("({} • {})", problem.difficulty, problem.topic).bright_black()
        );
    }
    println!();
    Ok(())
}
