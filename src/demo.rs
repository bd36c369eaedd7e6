use colored::Colorize;

/// A runnable demo unit: exactly two customization points, a title and a body.
/// The body's only observable effect is console output.
pub trait Demo {
    fn title(&self) -> &str;
    fn run_body(&self);
}

const BANNER: &str = "================================";

/// Runs one demo with the fixed wrapper shared by every variant: banner,
/// title, separator, body, two trailing blank lines.
pub fn run_demo(demo: &dyn Demo) {
    println!("{}", BANNER.cyan());
    println!("{}", demo.title().bold());
    println!("{}", BANNER.cyan());
    demo.run_body();
    println!();
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingDemo {
        runs: Cell<usize>,
    }

    impl Demo for CountingDemo {
        fn title(&self) -> &str {
            "CountingDemo"
        }

        fn run_body(&self) {
            self.runs.set(self.runs.get() + 1);
        }
    }

    #[test]
    fn test_run_demo_invokes_body_once() {
        let demo = CountingDemo { runs: Cell::new(0) };
        run_demo(&demo);
        assert_eq!(demo.runs.get(), 1);
    }
}
