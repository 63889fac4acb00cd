//! Page modules for route-level screens.
//!
//! The site has a single route; `portfolio` stacks every section and wires
//! the window scroll listener that drives the navigation chrome.

pub mod portfolio;
