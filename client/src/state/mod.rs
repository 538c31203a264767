//! Widget state for the portfolio page.
//!
//! DESIGN
//! ======
//! Each module is a plain Rust state machine with no DOM access, provided to
//! components through Leptos context. Persistence goes through
//! `util::storage::KeyValueStore`.

pub mod contact;
pub mod downloads;
pub mod lead_gate;
pub mod nav;
pub mod ui;
