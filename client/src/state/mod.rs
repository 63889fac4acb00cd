//! Client view state.
//!
//! Plain structs held in `RwSignal`s. Page-wide state (`ui`, `chat`) is
//! provided through context by `App`; section state (`projects`,
//! `contact_form`) is owned by the section component that renders it.

pub mod chat;
pub mod contact_form;
pub mod projects;
pub mod ui;
