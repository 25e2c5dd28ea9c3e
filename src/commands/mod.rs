pub mod config;
pub mod filter;
pub mod history;
pub mod next;
pub mod refresh;
pub mod reset;
pub mod show;
pub mod widget;

pub use config::*;
pub use filter::*;
pub use history::*;
pub use next::*;
pub use refresh::*;
pub use reset::*;
pub use show::*;
pub use widget::*;
