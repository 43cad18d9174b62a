//! Mock connection finder for integration testing
//!
//! Answers `mock_conn <from> <to>` from the fixture named by
//! `MOCK_CONN_FIXTURE`, using the same one-hop sea rule as the harness.
//! `MOCK_CONN_FAULT` injects a misbehaviour so failure paths can be tested:
//!
//! - `reverse`: print connections in reverse order (still correct)
//! - `no-boats`: omit boat connections
//! - `no-header`: skip the header line
//! - `exit-code`: print the right answer but exit with status 2
//! - `hang:<from>`: sleep for a minute when queried from `<from>`

use conn_tester::graph::{sea, Adjacency, Mode};
use conn_tester::testing::compare::NO_CONNECTION;
use std::path::PathBuf;
use std::time::Duration;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 {
        eprintln!("usage: mock_conn <from> <to>");
        std::process::exit(64);
    }
    let (from, to) = (&args[0], &args[1]);

    let fixture = std::env::var_os("MOCK_CONN_FIXTURE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("euro.txt"));
    let adjacency = match Adjacency::load(&fixture) {
        Ok(adjacency) => adjacency,
        Err(e) => {
            eprintln!("mock_conn: {e}");
            std::process::exit(66);
        }
    };
    let fault = std::env::var("MOCK_CONN_FAULT").unwrap_or_default();

    if let Some(slow_from) = fault.strip_prefix("hang:") {
        if slow_from == from {
            std::thread::sleep(Duration::from_secs(60));
        }
    }

    let mut modes = sea::connections(&adjacency, from, to);
    match fault.as_str() {
        "reverse" => modes.reverse(),
        "no-boats" => modes.retain(|m| *m != Mode::Boat),
        _ => {}
    }

    if fault != "no-header" {
        println!("{from} -> {to}:");
    }
    if modes.is_empty() {
        println!("{NO_CONNECTION}");
    }
    for mode in modes {
        println!("{}", mode.label());
    }

    if fault == "exit-code" {
        std::process::exit(2);
    }
}
