//! Explicitly constructed demo registry.
//!
//! Registration is an explicit phase run from `main` before any demo executes;
//! there is no global singleton and no reliance on static-initialization side
//! effects. Materialization stable-sorts the entries ascending by order key
//! (entries with equal keys keep their registration order) and instantiates
//! every factory once.

use crate::demo::Demo;

/// Zero-argument constructor producing one demo instance, owned by the caller.
pub type DemoFactory = Box<dyn Fn() -> Box<dyn Demo>>;

struct FactoryEntry {
    factory: DemoFactory,
    order: i32,
}

#[derive(Default)]
pub struct Registry {
    entries: Vec<FactoryEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a factory tagged with its order key. Keys need not be unique,
    /// and calls may arrive in any order.
    pub fn register<F>(&mut self, order: i32, factory: F)
    where
        F: Fn() -> Box<dyn Demo> + 'static,
    {
        self.entries.push(FactoryEntry {
            factory: Box::new(factory),
            order,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Materializes every registered entry, sorted ascending by order key.
    ///
    /// Entries are not consumed: registering after this call simply
    /// contributes to the next materialization.
    pub fn create_all(&mut self) -> Vec<Box<dyn Demo>> {
        self.entries.sort_by_key(|entry| entry.order);
        self.entries
            .iter()
            .map(|entry| (entry.factory)())
            .collect()
    }
}
