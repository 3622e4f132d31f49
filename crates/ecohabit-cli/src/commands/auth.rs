use clap::Subcommand;
use ecohabit_core::secrets::{self, TokenSource, API_TOKEN_ENV};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store the inference API token in the OS keyring
    Login {
        #[arg(long)]
        token: String,
    },
    /// Remove the stored token
    Logout,
    /// Show where the token would be read from
    Status,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AuthAction::Login { token } => {
            secrets::store_api_token(&token)?;
            println!("token stored in keyring");
        }
        AuthAction::Logout => {
            secrets::clear_api_token()?;
            println!("token removed from keyring");
        }
        AuthAction::Status => match secrets::resolve_api_token() {
            Some((_, TokenSource::Environment)) => println!("authenticated (from {API_TOKEN_ENV})"),
            Some((_, TokenSource::Keyring)) => println!("authenticated (from keyring)"),
            None => println!("not authenticated"),
        },
    }
    Ok(())
}
