//! Navigation and view state, kept free of DOM access.

mod drill_down;
mod hover;
mod search;
mod shell;
mod sidebar;

pub use drill_down::{DrillDown, DrillDownView};
pub use hover::{AnchorRect, HoverIntent, PendingHide, PopupPosition};
pub use search::{search_menu, SearchPanel, SearchState};
pub use shell::ShellState;
pub use sidebar::SidebarState;
