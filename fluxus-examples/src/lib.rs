//! Shared setup for the fluxus example programs.

pub mod logging;
