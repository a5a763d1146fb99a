//! Dashboard chrome: the view set, the shell holding the active view, and
//! header helpers.

pub mod header;
pub mod shell;
pub mod view;

pub use header::{greeting_for_hour, greeting_name, header_initials, HeaderView};
pub use shell::{DashboardShell, Layout};
pub use view::{navigation_items, DashboardView, NavItem, UnknownView};
