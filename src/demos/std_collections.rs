//! Standard-library collection walkthrough: `Vec`, `VecDeque`, `BTreeMap`,
//! sorting, searching, and explicit iterator traversal.

use std::collections::{BTreeMap, VecDeque};
use std::fmt::Display;

use crate::demo::Demo;

pub struct StdCollectionsExample;

fn print_all<'a, T, I>(items: I)
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for item in items {
        print!("{item} ");
    }
    println!();
}

impl StdCollectionsExample {
    fn vec_walkthrough(&self) {
        let mut numbers = vec![1, 2, 3, 4, 5];
        print_all(&numbers);

        numbers.push(6);
        print_all(&numbers);
    }

    fn deque_walkthrough(&self) {
        let mut numbers: VecDeque<i32> = (1..=5).collect();
        print_all(&numbers);

        numbers.push_back(6);
        print_all(&numbers);
    }

    fn map_walkthrough(&self) {
        let mut ages = BTreeMap::new();
        ages.insert("Alice", 30);
        ages.insert("Bob", 25);

        for (name, age) in &ages {
            println!("{name}: {age}");
        }
    }

    fn sort_and_find(&self) {
        let mut numbers = vec![5, 2, 9, 1, 5, 6];
        numbers.sort();
        print_all(&numbers);

        match numbers.iter().find(|&&n| n == 9) {
            Some(found) => println!("Found: {found}"),
            None => println!("Not found"),
        }
    }

    fn iterator_walkthrough(&self) {
        let numbers = [1, 2, 3, 4, 5];
        let mut iter = numbers.iter();
        while let Some(n) = iter.next() {
            print!("{n} ");
        }
        println!();
    }
}

impl Demo for StdCollectionsExample {
    fn title(&self) -> &str {
        "StdCollectionsExample"
    }

    fn run_body(&self) {
        self.vec_walkthrough();
        self.deque_walkthrough();
        self.map_walkthrough();
        self.sort_and_find();
        self.iterator_walkthrough();
    }
}
