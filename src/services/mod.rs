//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the chat logic so route handlers can stay focused on
//! JSON translation.

pub mod chat;
