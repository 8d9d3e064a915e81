//! Site-navigation sidebar rendering.
//!
//! Takes a navigation forest and the current page's address, builds a
//! collapsible widget tree into a caller-supplied container, marks the
//! entry for the current page and every section on the path to it, and
//! centers that entry in the sidebar viewport once layout has run.

pub mod address;
pub mod error;
pub mod nav;
pub mod sidebar;

pub use address::{same_page, strip_fragment, Resolver};
pub use error::NavDataError;
pub use nav::{load_nav, NavItem};
pub use sidebar::{build_sidebar, render_node, scroll_to_current, RenderPass};
