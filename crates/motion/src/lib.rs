//! Animation core for the Merke.am hero section
//!
//! Pure, clock-free state machines: the pointer trail buffer, the cursor
//! spring smoother, and the scripted collaborator choreography. The wasm UI
//! feeds these real frame times; tests feed them virtual time.

pub mod choreography;
pub mod scene;
pub mod spring;
pub mod trail;

pub use choreography::{Choreography, Event};
pub use scene::{CursorSpec, HeroParams, NodeSpec, CURSORS, NODES};
pub use spring::Spring2;
pub use trail::TrailBuffer;
