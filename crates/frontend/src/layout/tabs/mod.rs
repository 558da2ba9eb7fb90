//! Tab management module
//!
//! Contains:
//! - `tabs` / `tab` - the tab strip and its items
//! - `page` - keep-alive wrapper around each tab's content
//! - `registry` - the single mapping of tab.key -> View
//! - `tab_labels` - the single mapping of tab.key -> title

pub mod page;
pub mod registry;
pub mod tab;
pub mod tab_labels;
pub mod tabs;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
pub use tabs::Tabs;
