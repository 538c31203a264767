//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and wire browser events onto the state
//! machines in `state`, reading shared chrome state from Leptos context.

pub mod back_to_top;
pub mod contact_form;
pub mod cv_download;
pub mod datasets;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod reveal;
pub mod skill_bar;
