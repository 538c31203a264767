//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the contact form's REST call. The lead gate deliberately
//! has no network path.

pub mod api;
