use crate::core::error::Result;
use crate::core::kv::KvStore;
use crate::core::state::{store_directory, widget_directory};
use crate::core::sync::WidgetStore;
use crate::core::{print_info, print_success, RepoConfig};

/// Clear all persisted state: key-value entries, widget files, and finally
/// the config itself.
pub fn execute_reset() -> Result<()> {
    let Some(config) = RepoConfig::load()? else {
        print_info("Nothing to reset: no repository configured.");
        return Ok(());
    };

    let kv = KvStore::open(store_directory(&config)?)?;
    let widget = WidgetStore::open(widget_directory(&config)?)?;

    widget.clear()?;
    kv.clear()?;
    RepoConfig::delete()?;

    print_success(&format!(
        "Cleared all state for {}. Run 'config set' to start over.\n",
        config.slug()
    ));
    Ok(())
}
