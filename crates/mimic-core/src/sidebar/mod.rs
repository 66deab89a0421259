//! Sidebar interaction engine.
//!
//! - [`selection`]: single, additive and range selection over the flattened order
//! - [`grouping`]: creating a group from the current selection
//! - [`drag_drop`]: nested drop targets where the innermost handler wins
//! - [`controller`]: composes the above and re-renders after store changes

pub mod controller;
pub mod drag_drop;
pub mod flatten;
pub mod grouping;
pub mod notify;
pub mod scheduler;
pub mod selection;
pub mod view;

pub use controller::SidebarController;
pub use drag_drop::{DragDropCoordinator, DragState, DropOutcome, DropTarget, DropTargetId};
pub use flatten::{FlattenedOrder, SidebarFilter};
pub use grouping::{create_group_from_selection, GroupingOutcome};
pub use notify::{Notice, NoticeLevel};
pub use selection::{ClickButton, ClickIntent, Modifiers, SelectionEngine, SelectionList};
pub use view::{ExpansionState, SidebarView};
