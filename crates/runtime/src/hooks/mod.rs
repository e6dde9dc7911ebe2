//! Render hooks invoked after every accepted command.
//!
//! The presentation layer registers hooks on the session builder. After a
//! command is applied the session hands each hook the new snapshot, the
//! status message and the command's notices, in priority order. Hooks only
//! read; they cannot mutate the nation.

mod registry;

pub use registry::HookRegistry;

use nation_core::{CommandOutcome, NationSnapshot, Notice};

/// What a hook sees after a command.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext<'a> {
    /// Name of the command that produced the outcome (`"start"` for a freshly
    /// built session, `"reset"` for resets).
    pub command: &'static str,
    pub outcome: &'a CommandOutcome,
}

impl RenderContext<'_> {
    pub fn snapshot(&self) -> &NationSnapshot {
        &self.outcome.snapshot
    }

    pub fn message(&self) -> &str {
        &self.outcome.message
    }

    pub fn notices(&self) -> &[Notice] {
        &self.outcome.notices
    }
}

/// Presentation callback.
///
/// Closures taking a [`RenderContext`] implement this trait.
pub trait RenderHook: Send {
    /// Human-readable name used in logs.
    fn name(&self) -> &'static str {
        "render"
    }

    /// Lower values run first.
    fn priority(&self) -> i32 {
        0
    }

    fn render(&mut self, ctx: &RenderContext<'_>);
}

impl<F> RenderHook for F
where
    F: FnMut(&RenderContext<'_>) + Send,
{
    fn render(&mut self, ctx: &RenderContext<'_>) {
        self(ctx)
    }
}
