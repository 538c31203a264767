//! Service layer for request handlers.

pub mod contact;
