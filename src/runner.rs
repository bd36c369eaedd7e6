use crate::demo::{run_demo, Demo};

/// Runs every materialized demo front to back. Sequential by design: a panic
/// in one body aborts the remaining sequence rather than being isolated.
pub fn run_all(demos: &[Box<dyn Demo>]) {
    for demo in demos {
        run_demo(demo.as_ref());
    }
}
