use thiserror::Error;

/// The only error this crate defines: an inspection or removal attempted on a
/// container holding zero elements. No allocation or I/O failures are modeled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("{container}::{operation}: empty container")]
    Empty {
        container: &'static str,
        operation: &'static str,
    },
}

impl ContainerError {
    pub fn empty(container: &'static str, operation: &'static str) -> Self {
        Self::Empty {
            container,
            operation,
        }
    }
}
