//! Services used by HTTP routes.
//!
//! Route handlers stay focused on protocol translation; anything that talks
//! to the outside world lives here.

pub mod delivery;
