use crate::core::error::Result;
use crate::core::github::{RawUrlFetcher, WIDGET_FETCH_TIMEOUT};
use crate::core::problem::METADATA_DEFAULT;
use crate::core::state::widget_directory;
use crate::core::sync::WidgetStore;
use crate::core::{print_info, widget, RepoConfig};
use colored::*;

/// Open the widget file store for the configured repository. The config is
/// only used to locate the shared directory; widget fetches resolve through
/// the raw URL embedded in each record.
fn open_widget_store() -> Result<WidgetStore> {
    let config = RepoConfig::require()?;
    WidgetStore::open(widget_directory(&config)?)
}

pub fn execute_widget_next() -> Result<()> {
    let store = open_widget_store()?;
    let fetcher = RawUrlFetcher::new(WIDGET_FETCH_TIMEOUT);

    match widget::advance(&store, &fetcher)? {
        Some(current) => render_widget(&current),
        None => print_info("Widget candidate pool is empty. Open the app context: run 'problem-rotator refresh'."),
    }
    Ok(())
}

pub fn execute_widget_previous() -> Result<()> {
    let store = open_widget_store()?;

    match widget::rewind(&store)? {
        Some(current) => render_widget(&current),
        None => print_info("No previous problem in widget history."),
    }
    Ok(())
}

pub fn execute_widget_show() -> Result<()> {
    let store = open_widget_store()?;

    match store.read_current()? {
        Some(current) => render_widget(&current),
        None => print_info("No problem set. Run 'problem-rotator widget next' to fetch one."),
    }
    Ok(())
}

/// Render a record the way the widget host lays it out: title line, badges,
/// conditional metadata rows, seen marker, then the code list.
fn render_widget(current: &crate::core::CurrentProblem) {
    let problem = &current.problem;

    println!();
    print!("{}", problem.name.white().bold());
    if problem.seen {
        print!(" {}", "SEEN".yellow());
    }
    println!();
    println!(
        "{}",
        format!("{} • {}", problem.difficulty, problem.topic).bright_black()
    );
    if !current.repo_name.is_empty() {
        println!("{}", current.repo_name.bright_black());
    }

    if problem.intuition != METADATA_DEFAULT {
        println!("Intuition: {}", problem.intuition);
    }
    if problem.technique != METADATA_DEFAULT {
        println!("Tech: {}", problem.technique);
    }
    if problem.time_complexity != METADATA_DEFAULT || problem.space_complexity != METADATA_DEFAULT {
        println!(
            "Time: {} | Space: {}",
            problem.time_complexity, problem.space_complexity
        );
    }

    println!();
    for line in current.code.lines() {
        println!("{}", line.bright_black());
    }
    println!();
}
