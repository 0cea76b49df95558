//! # pods-shell
//!
//! A standalone CLI for exploring ordbase posets. Two narrated demos walk
//! through transitivity maintenance and bridge-preserving removal, and an
//! interactive REPL maps typed commands straight onto the store's nine
//! operations.
//!
//! Diagnostics from the API layer are ordinary `tracing` events; run with
//! `RUST_LOG=pods_api=warn` (or `debug` for per-call lines) to see them.

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use colored::*;
use pods_api::PosetApi;

// ─── CLI ───────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "pods-shell")]
#[command(about = "Partial-Order Data Store shell (ordbase)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Basic demo: three elements, two relations, transitivity for free
    Demo,
    /// Bridge demo: remove a middle element, watch its relations survive
    Bridge,
    /// Interactive REPL for manual experimentation
    Interactive,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Demo => run_demo(),
        Commands::Bridge => run_bridge(),
        Commands::Interactive => run_interactive(),
    }
}

// ─── Pretty printing ──────────────────────────────────────────────────────

fn header(text: &str) {
    let bar = "═".repeat(60);
    println!("\n{}", bar.bright_cyan());
    println!("  {}", text.bold().bright_white());
    println!("{}", bar.bright_cyan());
}

fn section(text: &str) {
    println!("\n{} {}", "▸".bright_yellow(), text.bold());
}

fn step(text: &str) {
    println!("  {} {}", "•".bright_green(), text);
}

fn verdict(label: &str, answer: bool) {
    if answer {
        println!("  {} {}", "✓".bright_green().bold(), label);
    } else {
        println!("  {} {}", "✗".bright_red().bold(), label);
    }
}

fn relation(a: &str, b: &str) -> String {
    format!(
        "{} {} {}",
        a.bright_magenta(),
        "<".bright_cyan(),
        b.bright_magenta()
    )
}

// ─── Demos ────────────────────────────────────────────────────────────────

fn run_demo() {
    header("DEMO — transitivity comes for free");

    let api = PosetApi::new();
    let id = api.new_poset();
    section("Setup");
    for v in ["A", "B", "C"] {
        api.insert(id, Some(v));
        step(&format!("insert {}", v.bright_magenta()));
    }
    api.add(id, Some("A"), Some("B"));
    step(&format!("add {}", relation("A", "B")));
    api.add(id, Some("B"), Some("C"));
    step(&format!("add {}", relation("B", "C")));

    section("Queries");
    verdict("A < B", api.test(id, Some("A"), Some("B")));
    verdict("B < C", api.test(id, Some("B"), Some("C")));
    verdict("A < C  (never added directly)", api.test(id, Some("A"), Some("C")));

    section("Delete the A < B edge");
    api.del(id, Some("A"), Some("B"));
    verdict("A < B gone", !api.test(id, Some("A"), Some("B")));
    verdict("B < C intact", api.test(id, Some("B"), Some("C")));
    verdict("A < C survives", api.test(id, Some("A"), Some("C")));

    section("Rejected mutations");
    verdict(
        "add C < A refused (would close a cycle)",
        !api.add(id, Some("C"), Some("A")),
    );
    verdict(
        "add B < B refused (reflexive)",
        !api.add(id, Some("B"), Some("B")),
    );
}

fn run_bridge() {
    header("BRIDGE — element removal preserves implied relations");

    let api = PosetApi::new();
    let id = api.new_poset();
    section("Build the chain low < mid < high");
    for v in ["low", "mid", "high"] {
        api.insert(id, Some(v));
        step(&format!("insert {}", v.bright_magenta()));
    }
    api.add(id, Some("low"), Some("mid"));
    api.add(id, Some("mid"), Some("high"));
    verdict("low < high (via mid)", api.test(id, Some("low"), Some("high")));

    section("Remove the bridge");
    api.remove(id, Some("mid"));
    step(&format!("remove {}", "mid".bright_magenta()));
    verdict(
        "low < high still holds",
        api.test(id, Some("low"), Some("high")),
    );
    step(&format!("{} elements remain", api.size(id)));

    section("And the re-materialized edge is now direct");
    verdict(
        "del low < high succeeds (no other path implies it)",
        api.del(id, Some("low"), Some("high")),
    );
    verdict(
        "low < high gone",
        !api.test(id, Some("low"), Some("high")),
    );
}

// ─── Interactive REPL ──────────────────────────────────────────────────────

fn run_interactive() {
    header("INTERACTIVE REPL — ordbase poset store");

    let api = PosetApi::new();

    println!();
    println!("  {}", "Commands:".bold().underline());
    println!("    {}                       Create a poset, print its id", "new".bright_cyan());
    println!("    {} <id>                Discard a poset", "delete".bright_cyan());
    println!("    {} <id>                 Reset a poset in place", "clear".bright_cyan());
    println!("    {} <id>                  Element count", "size".bright_cyan());
    println!("    {} <id>                  List elements", "list".bright_cyan());
    println!("    {} <id> <v>            Insert an element", "insert".bright_cyan());
    println!("    {} <id> <v>            Remove an element", "remove".bright_cyan());
    println!("    {} <id> <a> <b>           Add relation a < b", "add".bright_cyan());
    println!("    {} <id> <a> <b>           Delete direct relation a < b", "del".bright_cyan());
    println!("    {} <id> <a> <b>          Query whether a ≤ b", "test".bright_cyan());
    println!("    {}                        Exit", "quit".bright_cyan());
    println!();

    loop {
        print!("{}", "ordbase> ".bright_cyan().bold());
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() || input.is_empty() {
            break;
        }
        let parts: Vec<&str> = input.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "new" | "n" => {
                let id = api.new_poset();
                step(&format!("poset {} created", id.to_string().bright_yellow()));
            }

            "delete" => match parse_id(&parts, 1) {
                Some(id) => verdict(&format!("delete {}", id), api.delete(id)),
                None => usage("delete <id>"),
            },

            "clear" => match parse_id(&parts, 1) {
                Some(id) => verdict(&format!("clear {}", id), api.clear(id)),
                None => usage("clear <id>"),
            },

            "size" => match parse_id(&parts, 1) {
                Some(id) => step(&format!("{} elements", api.size(id))),
                None => usage("size <id>"),
            },

            "list" => match parse_id(&parts, 1) {
                Some(id) => {
                    let elements = api.elements(id);
                    if elements.is_empty() {
                        step("(empty)");
                    } else {
                        step(&elements.join(", "));
                    }
                }
                None => usage("list <id>"),
            },

            "insert" | "i" => match (parse_id(&parts, 1), parts.get(2).copied()) {
                (Some(id), Some(v)) => verdict(&format!("insert {}", v), api.insert(id, Some(v))),
                _ => usage("insert <id> <value>"),
            },

            "remove" => match (parse_id(&parts, 1), parts.get(2).copied()) {
                (Some(id), Some(v)) => verdict(&format!("remove {}", v), api.remove(id, Some(v))),
                _ => usage("remove <id> <value>"),
            },

            "add" | "a" => match (parse_id(&parts, 1), parts.get(2).copied(), parts.get(3).copied())
            {
                (Some(id), Some(a), Some(b)) => {
                    verdict(&relation(a, b), api.add(id, Some(a), Some(b)))
                }
                _ => usage("add <id> <a> <b>"),
            },

            "del" | "d" => match (parse_id(&parts, 1), parts.get(2).copied(), parts.get(3).copied())
            {
                (Some(id), Some(a), Some(b)) => {
                    verdict(&format!("del {}", relation(a, b)), api.del(id, Some(a), Some(b)))
                }
                _ => usage("del <id> <a> <b>"),
            },

            "test" | "t" => match (parse_id(&parts, 1), parts.get(2).copied(), parts.get(3).copied())
            {
                (Some(id), Some(a), Some(b)) => {
                    verdict(
                        &format!("{} ≤ {}", a.bright_magenta(), b.bright_magenta()),
                        api.test(id, Some(a), Some(b)),
                    )
                }
                _ => usage("test <id> <a> <b>"),
            },

            "quit" | "q" | "exit" => break,

            other => {
                println!("  {} Unknown command '{}'", "!".bright_red(), other);
            }
        }
    }

    println!("\n  {}", "bye".dimmed());
}

fn parse_id(parts: &[&str], index: usize) -> Option<u64> {
    parts.get(index).and_then(|s| s.parse().ok())
}

fn usage(text: &str) {
    println!("  {} Usage: {}", "!".bright_red(), text);
}
