//! gradebook CLI — the interactive console front-end.

use std::io;
use std::process;

use clap::Parser;

use gradebook_core::model::Student;
use gradebook_core::store::StudentStore;

mod commands;
mod prompt;
mod shell;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Console-based student record tracker")]
struct Cli {
    /// Start with a small sample roster loaded
    #[arg(long)]
    demo: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let mut store = StudentStore::new();
    if cli.demo {
        seed_demo(&mut store);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = prompt::Console::new(stdin.lock(), stdout.lock());

    if let Err(e) = shell::run(&mut store, &mut console) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn seed_demo(store: &mut StudentStore) {
    let seed = [
        (
            "S001",
            "Alice Johnson",
            "alice@example.edu",
            20,
            vec![("Math", 95.0), ("Science", 88.0)],
        ),
        (
            "S002",
            "Bob Smith",
            "bob@example.edu",
            22,
            vec![("Math", 64.0), ("History", 55.0)],
        ),
        (
            "S003",
            "Carmen Diaz",
            "carmen@example.edu",
            21,
            vec![("Science", 78.0)],
        ),
    ];

    for (id, name, email, age, grades) in seed {
        if store.add(Student::new(id, name, email, age)).is_err() {
            continue;
        }
        for (subject, score) in grades {
            if let Err(e) = store.add_grade(id, subject, score) {
                tracing::warn!("skipping demo grade for {id}: {e}");
            }
        }
    }
}
