//! Session orchestration for the HarmonyNation simulation.
//!
//! This crate owns the single [`NationState`](nation_core::NationState)
//! instance and exposes the command surface presentation layers drive.
//! Consumers build a [`Session`] from loaded content and an RNG, register
//! [`RenderHook`]s, and call one method per player command.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the controller and its builder
//! - [`hooks`] provides the render callback registry
//! - [`error`] holds runtime construction errors
pub mod error;
pub mod hooks;
pub mod session;

pub use error::{Result, RuntimeError};
pub use hooks::{HookRegistry, RenderContext, RenderHook};
pub use session::{Session, SessionBuilder};
