use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead, Write};
use tombola_core::{
    chance_percent, sample_roster, Category, Event, EventBus, Mode, RngState, Session,
};
use tombola_store::Store;

fn main() -> Result<()> {
    let store = Store::open_default();
    let (roster, saved_mode) = match &store {
        Some(store) => (
            store.load_roster()?.unwrap_or_default(),
            store.load_mode()?,
        ),
        None => (Vec::new(), None),
    };
    let mode = saved_mode.or(Some(Mode::Normal));
    let mut session = Session::restore(roster, mode, RngState::from_entropy());
    let mut events = EventBus::default();

    println!("Tombola raffle. Type 'help' for commands.");
    print_status(&session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("read command")?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();
        match command {
            "help" | "?" => print_help(),
            "load" => cmd_load(&mut session, &mut events, &args, store.as_ref()),
            "test" => {
                session.import_records(&sample_roster(), &mut events);
                persist_roster(&session, store.as_ref());
            }
            "mode" => cmd_mode(&mut session, &mut events, &args, store.as_ref()),
            "draw" => match session.draw(&mut events) {
                Ok(winner) => {
                    persist_roster(&session, store.as_ref());
                    println!("Winner: {} ({} tickets)", winner.name, winner.weight);
                }
                Err(err) => println!("{err}"),
            },
            "list" => print_eligible(&session),
            "roster" => print_roster(&session),
            "winners" => {
                if session.winners().is_empty() {
                    println!("no winners drawn yet");
                }
                for (place, name) in session.winners().iter().enumerate() {
                    println!("{}. {}", place + 1, name);
                }
            }
            "reset" => cmd_reset(&mut session, &mut events, store.as_ref()),
            "quit" | "exit" => break,
            other => println!("unknown command '{other}', try 'help'"),
        }
        report(&mut events);
    }
    Ok(())
}

fn print_help() {
    println!("  load <path> <male|female>   import a participant list");
    println!("  test                        import the built-in demo roster");
    println!("  mode <normal|premium>       switch eligibility mode");
    println!("  list                        show the eligible pool with chances");
    println!("  roster                      show every imported participant");
    println!("  draw                        draw one winner");
    println!("  winners                     show winners since the last refilter");
    println!("  reset                       clear all data (type 'reset' to confirm)");
    println!("  quit                        leave");
}

fn cmd_load(session: &mut Session, events: &mut EventBus, args: &[&str], store: Option<&Store>) {
    let (Some(path), Some(category)) = (args.first(), args.get(1)) else {
        println!("usage: load <path> <male|female>");
        return;
    };
    let Some(category) = Category::parse(category) else {
        println!("unknown category '{category}', expected male or female");
        return;
    };
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            println!("read {path}: {err}");
            return;
        }
    };
    session.import(&text, category, events);
    persist_roster(session, store);
}

fn cmd_mode(session: &mut Session, events: &mut EventBus, args: &[&str], store: Option<&Store>) {
    let Some(value) = args.first() else {
        println!("usage: mode <normal|premium>");
        return;
    };
    let Some(mode) = Mode::parse(value) else {
        println!("unknown mode '{value}', expected normal or premium");
        return;
    };
    session.set_mode(Some(mode), events);
    if let Some(store) = store {
        if let Err(err) = store.save_mode(mode) {
            eprintln!("save mode: {err}");
        }
    }
}

fn cmd_reset(session: &mut Session, events: &mut EventBus, store: Option<&Store>) {
    print!("Reset all data? [y/N] ");
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() || !answer.trim().eq_ignore_ascii_case("y") {
        println!("reset cancelled");
        return;
    }
    session.reset(events);
    if let Some(store) = store {
        if let Err(err) = store.clear() {
            eprintln!("clear store: {err}");
        }
    }
}

fn print_status(session: &Session) {
    let mode = session
        .mode()
        .map(Mode::id)
        .unwrap_or("unset");
    println!(
        "mode: {mode}  roster: {}  eligible: {}",
        session.roster().len(),
        session.eligible().len()
    );
}

fn print_eligible(session: &Session) {
    if session.eligible().is_empty() {
        println!("no participants eligible in this mode");
        return;
    }
    let total = session.total_weight();
    let mut entries: Vec<_> = session.eligible().iter().collect();
    entries.sort_by(|a, b| b.weight.cmp(&a.weight));
    for entry in entries {
        println!(
            "  {} ({}) - {} tickets, {:.1}% chance",
            entry.name,
            entry.category.id(),
            entry.weight,
            chance_percent(entry.weight, total)
        );
    }
    println!("{} eligible, {} tickets total", session.eligible().len(), total);
}

fn print_roster(session: &Session) {
    if session.roster().is_empty() {
        println!("roster is empty");
        return;
    }
    for entry in session.roster() {
        println!("  {} ({}) - {} tickets", entry.name, entry.category.id(), entry.weight);
    }
}

fn persist_roster(session: &Session, store: Option<&Store>) {
    if let Some(store) = store {
        if let Err(err) = store.save_roster(session.roster()) {
            eprintln!("save roster: {err}");
        }
    }
}

fn report(events: &mut EventBus) {
    for event in events.drain() {
        match event {
            Event::RosterImported { added, total } => {
                println!("imported {added} new participants ({total} on the roster)");
            }
            Event::ModeChanged { mode, eligible } => {
                let mode = mode.map(Mode::id).unwrap_or("unset");
                println!("mode {mode}: {eligible} eligible");
            }
            Event::WinnerDrawn { remaining, .. } => {
                println!("{remaining} left in the pool");
            }
            Event::RosterCleared => println!("all data cleared"),
        }
    }
}
