//! Interactive chat with the guidance assistant.

use std::io::{BufRead, Write};

use clap::Args;
use disha_core::catalog::{Field, Filter, Level};
use disha_core::storage::{Config, SessionStore};
use disha_core::{App, Catalog, Sender};

#[derive(Args)]
pub struct ChatArgs {
    /// Initial level filter (undergraduate/postgraduate/diploma/certificate)
    #[arg(long)]
    level: Option<Level>,
    /// Initial subject filter (engineering/medicine/business/arts/science)
    #[arg(long)]
    field: Option<Field>,
    /// Seed the assistant's random source for reproducible replies
    #[arg(long)]
    seed: Option<u64>,
    /// Skip the cosmetic typing delay
    #[arg(long)]
    no_delay: bool,
}

const HELP: &str = "commands: /filter [level] [field], /clear, /help, /quit";

pub fn run(args: ChatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open_default()?;
    let mut config = Config::load_or_default();
    if let Some(seed) = args.seed {
        config.assistant.seed = Some(seed);
    }
    if args.no_delay {
        config.assistant.typing_delay_min_ms = 0;
        config.assistant.typing_delay_extra_ms = 0;
    }
    let show_timestamps = config.ui.show_timestamps;

    let mut app = App::new(Catalog::builtin(), store, config);
    app.set_filter(Filter::new(args.level, args.field));

    if let Some(profile) = app.profile() {
        println!("(logged in as {})", profile.name);
    }
    print_message(&app.conversation()[0].text);
    println!("({HELP})\n");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("you> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(command) = input.strip_prefix('/') {
            if !handle_command(command, &mut app)? {
                break;
            }
            continue;
        }

        let delay = app.typing_delay();
        let reply_id = app.send_message(input);
        // Cosmetic only; the reply is already appended in submission order.
        std::thread::sleep(delay);
        if let Some(msg) = app.conversation().iter().find(|m| m.id == reply_id) {
            debug_assert_eq!(msg.sender, Sender::Assistant);
            if show_timestamps {
                println!("disha [{}]>", msg.timestamp.format("%H:%M:%S"));
            } else {
                println!("disha>");
            }
            print_message(&msg.text);
            println!();
        }
    }
    Ok(())
}

/// Returns false when the loop should exit.
fn handle_command(command: &str, app: &mut App) -> Result<bool, Box<dyn std::error::Error>> {
    let mut parts = command.split_whitespace();
    match parts.next().unwrap_or("") {
        "quit" | "exit" => return Ok(false),
        "clear" => {
            app.clear_conversation();
            println!("(conversation cleared)");
            print_message(&app.conversation()[0].text);
        }
        "help" => println!("{HELP}"),
        "filter" => {
            let level = match parts.next() {
                None | Some("all") => None,
                Some(s) => Some(s.parse::<Level>()?),
            };
            let field = match parts.next() {
                None | Some("all") => None,
                Some(s) => Some(s.parse::<Field>()?),
            };
            app.set_filter(Filter::new(level, field));
            println!("(filter set: {})", app.filter());
        }
        other => println!("(unknown command '/{other}' -- {HELP})"),
    }
    Ok(true)
}

fn print_message(text: &str) {
    for line in text.lines() {
        println!("  {line}");
    }
}
