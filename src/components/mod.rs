//! View components for the directory and detail pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filter controls render as plain `<a href>` links whose targets come from
//! `Selection`'s `with_*` methods, so the router owns every state change
//! and each one lands in the address bar. Components read the shared cache
//! and the query directly from context rather than taking reactive props.

pub mod category_list;
pub mod module_card;
pub mod search_box;
pub mod site_header;
pub mod sort_menu;
pub mod stats_bar;
pub mod type_tabs;
pub mod version_switch;
