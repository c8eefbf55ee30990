//! tinge CLI
//!
//! Token dump harness for the highlighting tokenizer.

use tinge::commands::lex_file;

fn main() {
    tinge::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let mut lang = None;
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                if let Some(name) = arg.strip_prefix("--lang=") {
                    lang = Some(name);
                } else if !arg.starts_with('-') && file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: tinge lex <file> [--lang=<name>]");
                std::process::exit(1);
            };

            if let Err(e) = lex_file(path, lang) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("tinge {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("tinge - highlighting tokenizer harness");
    println!();
    println!("Usage: tinge <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file> [--lang=<name>]   Print the token stream of a file");
    println!("  help                         Show this message");
    println!("  version                      Show version information");
    println!();
    println!("Languages: c, go, python, markup, plain");
    println!("  Detected from the file extension unless --lang is given.");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=tinge_lexer=trace tinge lex <file>");
}
