//! Static host for the Merke.am landing page
//!
//! Embeds the page markup, stylesheet, and wasm bundle into the binary and
//! serves them over HTTP. No API, no state: the hero is entirely
//! client-side.

pub mod config;
pub mod embedded;
