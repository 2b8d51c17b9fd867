//! Nara interpreter CLI.
//!
//! `nara` with no arguments starts the REPL; `nara <file>` runs a file.

use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None => {
            if let Err(err) = narac::repl() {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        Some("-h" | "--help") => print_usage(),
        Some(flag) if flag.starts_with('-') => {
            eprintln!("error: unknown option '{flag}'");
            print_usage();
            std::process::exit(1);
        }
        Some(path) => {
            if args.len() > 2 {
                eprintln!("error: expected a single file path");
                print_usage();
                std::process::exit(1);
            }
            if let Err(err) = narac::run_file(Path::new(path)) {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Usage: nara [file.nara]");
    println!();
    println!("  nara            Start the interactive REPL");
    println!("  nara <file>     Run a Nara source file");
    println!("  nara -h         Show this help");
}
