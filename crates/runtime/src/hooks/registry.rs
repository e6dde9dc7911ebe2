//! Hook registry for managing and running render hooks.

use tracing::trace;

use super::{RenderContext, RenderHook};

/// Ordered set of render hooks.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Box<dyn RenderHook>>,
}

impl HookRegistry {
    /// Creates a registry; hooks are sorted by priority (lower values first).
    pub fn new(mut hooks: Vec<Box<dyn RenderHook>>) -> Self {
        hooks.sort_by_key(|hook| hook.priority());
        Self { hooks }
    }

    /// Adds a hook, keeping priority order. Equal priorities run in
    /// registration order.
    pub fn register(&mut self, hook: Box<dyn RenderHook>) {
        let position = self
            .hooks
            .partition_point(|existing| existing.priority() <= hook.priority());
        self.hooks.insert(position, hook);
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Runs every hook in order.
    pub fn render_all(&mut self, ctx: &RenderContext<'_>) {
        for hook in &mut self.hooks {
            trace!(hook = hook.name(), command = ctx.command, "running render hook");
            hook.render(ctx);
        }
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.hooks.iter().map(|hook| hook.name()))
            .finish()
    }
}
