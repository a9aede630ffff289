// kons - Demo driver for the kons-core immutable list library
// Copyright (c) 2025 Tom Waddington. MIT licensed.

use std::env;
use std::process;

use kons_core::{list, Fresh, List, Result};
use num_bigint::BigUint;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Handle --version flag
    if args.len() == 2 && (args[1] == "--version" || args[1] == "-v") {
        println!("kons v0.1.0");
        return;
    }

    if args.len() == 2 && (args[1] == "--help" || args[1] == "-h") {
        println!("Usage: kons [--version | --help]");
        println!();
        println!("Runs a tour of the kons-core list operations.");
        return;
    }

    if args.len() > 1 {
        eprintln!("Usage: kons [--version | --help]");
        process::exit(1);
    }

    if let Err(e) = run_demo() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Walk the library surface with the classic countdown list.
fn run_demo() -> Result<()> {
    let countdown = list![4, 3, 2, 1, 0];
    let back_half = list![10, 11, 12, 13, 14];

    let ascending = countdown.reversed();
    let appended = countdown.append(&back_half);
    let rev_appended = countdown.rev_append(&back_half);
    let bindings = list![('a', 1), ('b', 42), ('c', 84)];

    println!("countdown: {}", countdown);
    println!("reversed: {}", ascending);
    println!("append: {}", appended);
    println!("rev_append: {}", rev_appended);

    println!("exists (== 3): {}", countdown.exists(|n| *n == 3));
    println!("exists (== 42): {}", countdown.exists(|n| *n == 42));
    println!("for_all (< 5): {}", countdown.for_all(|n| *n < 5));
    println!("for_all (> 5): {}", countdown.for_all(|n| *n > 5));

    println!("assoc 'c': {}", bindings.assoc(&'c')?);
    println!("mem_assoc 'b': {}", bindings.mem_assoc(&'b'));
    println!("mem_assoc 'f': {}", bindings.mem_assoc(&'f'));
    println!("find (== 3 - 1): {}", countdown.find(|n| *n == 3 - 1)?);

    println!("countdown len: {}", countdown.len());
    println!("append len: {}", appended.len());
    println!("singleton len: {}", List::singleton(42).len());
    println!("hd: {}", countdown.head()?);
    println!("tl: {}", countdown.tail()?);
    println!("nth(0): {}", countdown.nth(0)?);
    println!("nth(3): {}", countdown.nth(3)?);
    println!("nth(4): {}", countdown.nth(4)?);
    if let Err(e) = countdown.nth(99) {
        println!("nth(99): {}", e);
    }

    // Consing onto Fresh and consing onto Empty build the same list
    let from_fresh = List::cons(9, Fresh);
    let from_empty = List::cons(9, List::new());
    println!("cons onto Fresh == cons onto Empty: {}", from_fresh == from_empty);

    add_element(&List::new());
    add_element(&List::cons(42, Fresh).tail()?);
    add_element(&list![20, 10]);

    for (i, e) in countdown.iter().enumerate() {
        println!("i: {} -> {}", i, e);
    }

    let sums = countdown.map2(&ascending, |a, b| a + b)?;
    println!("countdown + reversed: {}", sums);

    // map may change the element type; factorials outgrow machine integers
    let factorials = appended.map(|n| factorial(*n as u32));
    println!("factorials: {}", factorials);

    // None of the above touched the original
    println!("countdown still: {}", countdown);

    Ok(())
}

/// Cons an element onto a list, leaving the original list as it was.
fn add_element(l: &List<i32>) {
    println!("len before add_element: {}", l.len());
    let grown = List::cons(42, l);
    println!("len after add_element: {}", grown.len());
}

/// n! as a big integer.
fn factorial(n: u32) -> BigUint {
    let mut acc = BigUint::from(1u32);
    for k in 2..=n {
        acc *= k;
    }
    acc
}
