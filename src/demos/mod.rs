//! The built-in demo units and their explicit registration list.

mod containers;
mod generics;
mod std_collections;

pub use containers::DataStructureExample;
pub use generics::GenericsExample;
pub use std_collections::StdCollectionsExample;

use crate::registry::Registry;

/// The registration phase: called once from `main`, before materialization.
/// Registration order deliberately differs from key order; `create_all` sorts.
pub fn register_builtin(registry: &mut Registry) {
    registry.register(3, || Box::new(DataStructureExample));
    registry.register(1, || Box::new(GenericsExample));
    registry.register(2, || Box::new(StdCollectionsExample));
}
