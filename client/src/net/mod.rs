//! Networking.
//!
//! `api` posts the contact form; everything else on the page is static.

pub mod api;
