use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter};

use classroom_dsa::search::{binary_search, linear_search};
use classroom_dsa::sort::{bubble_sort, insertion_sort, selection_sort};
use classroom_dsa::{LinkedList, Stack};

/// Walks through the classroom data structures and algorithms.
#[derive(Debug, Parser)]
#[command(name = "dsa-demo", version)]
struct Cli {
    #[command(subcommand)]
    demo: Option<Demo>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). DSA_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Demo {
    /// Linked list insertion, lookup and removal.
    List,
    /// Sort a fixed sample array.
    Sort {
        #[arg(long, value_enum, default_value_t = Algorithm::Insertion)]
        algorithm: Algorithm,
    },
    /// Push, peek and pop on a stack.
    Stack,
    /// Linear and binary search over a sorted sample.
    Search {
        #[arg(long, default_value_t = 7)]
        target: i32,
    },
    /// Run every demo.
    All,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Insertion,
    Selection,
    Bubble,
}

fn setup_logs(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("DSA_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn run_list() -> Result<()> {
    let mut list = LinkedList::new();
    list.push_back(10);
    list.push_back(20);
    list.push_front(5);
    list.insert_at(1, 15)?;
    println!("List: {}", list);

    match list.find(&10) {
        Some(index) => println!("Index of 10: {}", index),
        None => println!("Index of 10: not found"),
    }

    let first = list.pop_front()?;
    info!("removed first element {}", first);
    let last = list.pop_back()?;
    info!("removed last element {}", last);
    list.remove(&15);
    list.push_back(25);
    println!("Final List: {} (size={})", list, list.size());
    Ok(())
}

fn run_sort(algorithm: Algorithm) {
    let mut arr = [5, 2, 9, 1, 5, 6];
    println!("Original: {:?}", arr);
    match algorithm {
        Algorithm::Insertion => insertion_sort(&mut arr),
        Algorithm::Selection => selection_sort(&mut arr),
        Algorithm::Bubble => bubble_sort(&mut arr),
    }
    println!("Sorted ({:?}): {:?}", algorithm, arr);
}

fn run_stack() {
    let mut stack = Stack::new();
    stack.push(10);
    stack.push(20);
    stack.push(30);
    println!("Stack after pushes: {}", stack);

    if let Some(top) = stack.peek() {
        println!("Top element: {}", top);
    }

    if let Some(popped) = stack.pop() {
        println!("Popped element: {}", popped);
    }
    println!("Stack after pop: {}", stack);
}

fn run_search(target: i32) {
    let sorted = [1, 3, 5, 7, 9, 11, 13];
    report("Linear search", target, linear_search(&sorted, &target));
    report("Binary search", target, binary_search(&sorted, &target));
}

fn report(label: &str, target: i32, found: Option<usize>) {
    match found {
        Some(index) => println!("{}: {} found at index {}", label, target, index),
        None => println!("{}: {} not found", label, target),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logs(cli.verbose);

    match cli.demo.unwrap_or(Demo::All) {
        Demo::List => run_list()?,
        Demo::Sort { algorithm } => run_sort(algorithm),
        Demo::Stack => run_stack(),
        Demo::Search { target } => run_search(target),
        Demo::All => {
            run_list()?;
            run_sort(Algorithm::Insertion);
            run_stack();
            run_search(7);
        }
    }

    Ok(())
}
