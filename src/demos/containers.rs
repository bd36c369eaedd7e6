//! Exercises the hand-rolled `Stack` and `Queue` end to end.

use crate::collections::{Queue, Stack};
use crate::demo::Demo;

pub struct DataStructureExample;

impl Demo for DataStructureExample {
    fn title(&self) -> &str {
        "DataStructureExample"
    }

    fn run_body(&self) {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        match stack.top() {
            Ok(top) => println!("Stack top: {top}"),
            Err(err) => println!("[err] {err}"),
        }
        if let Err(err) = stack.pop() {
            println!("[err] {err}");
        }
        match stack.top() {
            Ok(top) => println!("Stack top after pop: {top}"),
            Err(err) => println!("[err] {err}"),
        }

        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        match queue.front() {
            Ok(front) => println!("Queue front: {front}"),
            Err(err) => println!("[err] {err}"),
        }
        if let Err(err) = queue.dequeue() {
            println!("[err] {err}");
        }
        match queue.front() {
            Ok(front) => println!("Queue front after dequeue: {front}"),
            Err(err) => println!("[err] {err}"),
        }
    }
}
