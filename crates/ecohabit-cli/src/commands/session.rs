//! Line-oriented interactive session.
//!
//! One challenge store and at most one chat session live for the whole
//! process, the way a mobile app keeps them for its lifetime.

use std::io::{self, BufRead, Write};

use ecohabit_core::{ChallengeCategory, ChallengeStore, ChatSession, Config, ECO_TIPS};
use tokio::runtime::Runtime;

use super::challenges::{print_details, resolve, summary_line};
use super::rewards::describe;

const HELP: &str = "\
commands:
  list [category]   list challenges, optionally one category
  active            list started challenges
  show <ref>        show a challenge (position, id or title)
  start <ref>       start a challenge
  points            show points and reward tier
  tips              show eco tips
  chat <text>       talk to the eco assistant
  help              this text
  quit              leave the session";

struct Session {
    store: ChallengeStore,
    chat: Option<ChatSession>,
    config: Config,
    runtime: Runtime,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session {
        store: ChallengeStore::new(),
        chat: None,
        config: Config::load_or_default(),
        runtime: Runtime::new()?,
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("Welcome to EcoHabit Tracker! Type `help` for commands.");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
        let arg = arg.trim();
        match command {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "list" => session.list(arg),
            "active" => session.active(),
            "show" => session.show(arg),
            "start" => session.start(arg),
            "points" => println!("{}", describe(&session.store.reward_status())),
            "tips" => ECO_TIPS.iter().for_each(|tip| println!("- {tip}")),
            "chat" => session.chat(arg),
            other => println!("unknown command: {other} (try `help`)"),
        }
    }
    Ok(())
}

impl Session {
    fn list(&self, category: &str) {
        let category = if category.is_empty() {
            ChallengeCategory::All
        } else {
            match category.parse() {
                Ok(c) => c,
                Err(e) => {
                    println!("{e}");
                    return;
                }
            }
        };
        for challenge in self.store.filter_by_category(category) {
            println!("{}", summary_line(&self.store, challenge));
        }
    }

    fn active(&self) {
        let active = self.store.list_active();
        if active.is_empty() {
            println!("no active challenges yet");
        }
        for challenge in active {
            println!("{}", summary_line(&self.store, challenge));
        }
    }

    fn show(&self, reference: &str) {
        match resolve(&self.store, reference).and_then(|id| self.store.get(&id)) {
            Some(challenge) => print_details(challenge),
            None => println!("no such challenge: {reference}"),
        }
    }

    fn start(&mut self, reference: &str) {
        let Some(id) = resolve(&self.store, reference) else {
            println!("no such challenge: {reference}");
            return;
        };
        let started = self.store.start_challenge(&id);
        let title = self
            .store
            .get(&id)
            .map(|c| c.title.clone())
            .unwrap_or_default();
        if started {
            println!(
                "started: {title} (+{} points)",
                ecohabit_core::START_AWARD_POINTS
            );
        } else {
            println!("already active: {title}");
        }
    }

    fn chat(&mut self, text: &str) {
        if self.chat.is_none() {
            match ChatSession::from_config(&self.config.chat) {
                Ok(chat) => {
                    chat.send_initial_message();
                    if let Some(greeting) = chat.last_message() {
                        println!("assistant> {}", greeting.content());
                    }
                    self.chat = Some(chat);
                }
                Err(e) => {
                    println!("chat unavailable: {e}");
                    return;
                }
            }
        }
        let Some(chat) = &self.chat else {
            return;
        };
        if text.is_empty() {
            return;
        }

        match self.runtime.block_on(chat.send_user_message(text)) {
            Ok(()) => {
                if let Some(reply) = chat.last_message() {
                    println!("assistant> {}", reply.content());
                }
            }
            Err(e) => println!("{e}"),
        }
    }
}
