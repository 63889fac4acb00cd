//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the pure parts (thresholds, typewriter steps, link formats) stay
//! testable without a DOM.

pub mod gradient;
pub mod icon;
pub mod links;
pub mod scroll;
pub mod typewriter;
pub mod visibility;
