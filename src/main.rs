use study_rust::demos;
use study_rust::registry::Registry;
use study_rust::runner;

fn main() {
    let mut registry = Registry::new();
    demos::register_builtin(&mut registry);

    let instances = registry.create_all();
    runner::run_all(&instances);
}
