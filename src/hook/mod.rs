// ABOUTME: Hook chains - ordered transformation pipelines over context structs.
// ABOUTME: Replaces ad-hoc dispatch with chains assembled once at startup.

use std::fmt;

/// Continuation decision returned by every transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Run the remaining transforms.
    Continue,
    /// Stop the chain; the context holds the final result.
    Halt,
}

type TransformFn<C> = Box<dyn Fn(&mut C) -> Flow + Send + Sync>;

/// An ordered chain of pure transformation functions over a context.
///
/// Transforms run in ascending priority order; registration order breaks
/// ties. Chains are assembled once at plugin init and never mutated while
/// requests are in flight.
pub struct Chain<C> {
    entries: Vec<(i32, TransformFn<C>)>,
}

impl<C> Chain<C> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a transform at the given priority.
    pub fn register<F>(&mut self, priority: i32, transform: F)
    where
        F: Fn(&mut C) -> Flow + Send + Sync + 'static,
    {
        let at = self.entries.partition_point(|(p, _)| *p <= priority);
        self.entries.insert(at, (priority, Box::new(transform)));
    }

    /// Run the chain over the context.
    ///
    /// Returns `Flow::Halt` as soon as a transform halts, otherwise
    /// `Flow::Continue` after the last transform.
    pub fn run(&self, ctx: &mut C) -> Flow {
        for (_, transform) in &self.entries {
            if transform(ctx) == Flow::Halt {
                return Flow::Halt;
            }
        }
        Flow::Continue
    }

    /// Number of registered transforms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the chain has no transforms.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C> Default for Chain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for Chain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("transforms", &self.entries.len())
            .finish()
    }
}
