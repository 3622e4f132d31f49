use clap::Subcommand;
use ecohabit_core::{ChatLog, ChatSession, Config};

#[derive(Subcommand)]
pub enum ChatAction {
    /// Open a chat, send one message and print the conversation
    Send {
        /// Message text
        text: String,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ChatAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ChatAction::Send { text, json } => {
            let config = Config::load_or_default();
            let session = ChatSession::from_config(&config.chat)?;
            session.send_initial_message();

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(session.send_user_message(&text))?;

            let log = session.log();
            if json {
                println!("{}", serde_json::to_string_pretty(&log)?);
            } else {
                print_log(&log);
            }
        }
    }
    Ok(())
}

pub fn print_log(log: &ChatLog) {
    for message in log.messages() {
        let who = if message.is_user() { "you" } else { "assistant" };
        println!("{who}> {}", message.content());
    }
}
