//! Generics walkthrough: generic functions, type-specialized impl blocks, a
//! per-type marker trait, and compile-time evaluation with `const fn`.

use std::cmp::Ordering;
use std::ops::Add;

use crate::demo::Demo;

pub fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Homogeneous pair with plain getters.
pub struct Pair<T> {
    first: T,
    second: T,
}

impl<T> Pair<T> {
    pub fn new(first: T, second: T) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &T {
        &self.first
    }

    pub fn second(&self) -> &T {
        &self.second
    }
}

// Extra capability only the &str instantiation gets.
impl Pair<&str> {
    pub fn compare(&self) -> Ordering {
        self.first.cmp(self.second)
    }
}

/// Heterogeneous pair; narrower instantiations gain extra capabilities below.
pub struct Pair2<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair2<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }
}

// Both halves share a type: summing becomes possible.
impl<T: Copy + Add<Output = T>> Pair2<T, T> {
    pub fn sum(&self) -> T {
        self.first + self.second
    }
}

// Both halves are references to the same type: sum through them.
impl<'a, T: Copy + Add<Output = T>> Pair2<&'a T, &'a T> {
    pub fn deref_sum(&self) -> T {
        *self.first + *self.second
    }
}

/// Per-type compile-time flag, answered without any runtime inspection.
pub trait Arithmetic {
    const IS_ARITHMETIC: bool;
}

impl Arithmetic for i32 {
    const IS_ARITHMETIC: bool = true;
}

impl Arithmetic for f64 {
    const IS_ARITHMETIC: bool = true;
}

impl Arithmetic for &str {
    const IS_ARITHMETIC: bool = false;
}

pub fn describe_arithmetic<T: Arithmetic>() -> &'static str {
    if T::IS_ARITHMETIC {
        "The type is arithmetic."
    } else {
        "The type is not arithmetic."
    }
}

/// Evaluated at compile time when assigned to a `const`.
pub const fn factorial(n: u64) -> u64 {
    let mut acc = 1;
    let mut i = 2;
    while i <= n {
        acc *= i;
        i += 1;
    }
    acc
}

const FACTORIAL_5: u64 = factorial(5);

pub struct GenericsExample;

impl Demo for GenericsExample {
    fn title(&self) -> &str {
        "GenericsExample"
    }

    fn run_body(&self) {
        println!("{}", max_of(3, 7));
        println!("{}", max_of(3.5, 7.2));
        println!("{}", max_of('a', 'b'));

        let int_pair = Pair::new(1, 2);
        let double_pair = Pair::new(3.5, 4.5);
        let str_pair = Pair::new("hello", "world");
        println!("Int Pair: {}, {}", int_pair.first(), int_pair.second());
        println!(
            "Double Pair: {}, {}",
            double_pair.first(),
            double_pair.second()
        );
        println!("Str Pair comparison: {:?}", str_pair.compare());

        let mixed_pair = Pair2::new(1, 2.5);
        println!(
            "Mixed Pair: ({}, {})",
            mixed_pair.first(),
            mixed_pair.second()
        );

        let int_pair2 = Pair2::new(3, 4);
        println!(
            "Int Pair: ({}, {}) with sum: {}",
            int_pair2.first(),
            int_pair2.second(),
            int_pair2.sum()
        );

        let a = 5;
        let b = 6;
        let ref_pair = Pair2::new(&a, &b);
        println!(
            "Ref Pair: ({}, {}) with dereferenced sum: {}",
            ref_pair.first(),
            ref_pair.second(),
            ref_pair.deref_sum()
        );

        println!("i32: {}", describe_arithmetic::<i32>());
        println!("f64: {}", describe_arithmetic::<f64>());
        println!("&str: {}", describe_arithmetic::<&str>());

        println!("5! computed at compile time: {FACTORIAL_5}");
    }
}
