//! Core traits for platform-agnostic motion emulation.
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Live input mappings live with the host application

pub mod input;

pub use input::{InputSource, MockInput};
