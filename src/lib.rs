//! A tour of Rust language features, driven by a factory/registry of runnable
//! demo units: hand-rolled growable containers, standard-library collections,
//! and generics, each wrapped in a shared banner/trailer lifecycle.

pub mod collections;
pub mod demo;
pub mod demos;
pub mod error;
pub mod registry;
pub mod runner;
