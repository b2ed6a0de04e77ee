//! Sloane - Entry Point
//!
//! Runs the mentor persona in one of two modes: single-shot (all arguments
//! joined as one input, one reply printed) or an interactive line loop.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dialogue_core::{is_scenario_intro, DialogueEngine};
use persona_rules::ScenarioStore;

#[derive(Parser)]
#[command(name = "sloane", about = "A tough VC mentor for communication practice")]
struct Cli {
    /// Message to send; interactive mode when omitted.
    input: Vec<String>,

    /// Path to the scenario dataset.
    #[arg(long)]
    scenarios: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let dataset = cli.scenarios.unwrap_or_else(ScenarioStore::default_path);
    let mut engine = DialogueEngine::new(ScenarioStore::load(&dataset));
    tracing::debug!(
        dataset = %dataset.display(),
        levels = engine.store().len(),
        "engine ready"
    );

    print_banner(&engine);

    if !cli.input.is_empty() {
        let input = cli.input.join(" ");
        let reply = engine.respond(&input);
        print_reply(&engine, &reply);
        return Ok(());
    }

    interactive_loop(&mut engine)
}

fn print_banner(engine: &DialogueEngine) {
    let divider = "=".repeat(60);
    println!("{}", divider);
    println!("{}", engine.persona().name.to_uppercase());
    println!("{}", divider);
    println!("Philosophy: {}", engine.persona().philosophy);
    println!("{}", divider);
    println!();
}

fn print_reply(engine: &DialogueEngine, reply: &str) {
    // Scenario intros carry their own layout and print raw.
    if is_scenario_intro(reply) {
        println!("{}", reply);
    } else {
        println!("{}: {}", engine.persona().name, reply);
    }
}

fn interactive_loop(engine: &mut DialogueEngine) -> Result<()> {
    let farewell_name = engine.persona().name.clone();
    ctrlc::set_handler(move || {
        println!("\n{}: Time's up. Come back when you're ready.", farewell_name);
        std::process::exit(0);
    })?;

    println!("{}: We don't have time. Pitch me your update.", engine.persona().name);
    println!("\nCommands: 'scenarios' to list levels, 'start level <N>' to begin a scenario");
    println!("Type 'exit' or 'quit' to leave.\n");

    loop {
        print!("You: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            // Stdin closed; same farewell as an interrupt.
            println!(
                "\n{}: Time's up. Come back when you're ready.",
                engine.persona().name
            );
            return Ok(());
        }

        let input = line.trim();
        if matches!(input.to_lowercase().as_str(), "exit" | "quit" | "bye") {
            println!("{}: Make it count. Goodbye.", engine.persona().name);
            return Ok(());
        }

        let reply = engine.respond(input);
        print_reply(engine, &reply);
        println!();
    }
}
