use clap::Subcommand;
use ecohabit_core::{Challenge, ChallengeCategory, ChallengeId, ChallengeStore};

#[derive(Subcommand)]
pub enum ChallengesAction {
    /// List challenges
    List {
        /// Only show one category (water, energy, recycling, transportation, nature, all)
        #[arg(long, default_value = "all")]
        category: ChallengeCategory,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one challenge in full
    Show {
        /// 1-based catalog position, challenge id or title
        challenge: String,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ChallengesAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = ChallengeStore::new();

    match action {
        ChallengesAction::List { category, json } => {
            let challenges = store.filter_by_category(category);
            if json {
                println!("{}", serde_json::to_string_pretty(&challenges)?);
            } else {
                for challenge in challenges {
                    println!("{}", summary_line(&store, challenge));
                }
            }
        }
        ChallengesAction::Show { challenge, json } => {
            let id = resolve(&store, &challenge)
                .ok_or_else(|| format!("no such challenge: {challenge}"))?;
            let challenge = store
                .get(&id)
                .ok_or_else(|| format!("no such challenge: {challenge}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(challenge)?);
            } else {
                print_details(challenge);
            }
        }
    }
    Ok(())
}

/// Resolve a user reference: 1-based catalog position, id, or title.
pub fn resolve(store: &ChallengeStore, reference: &str) -> Option<ChallengeId> {
    let reference = reference.trim();
    if let Ok(position) = reference.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|i| store.list_all().get(i))
            .map(Challenge::id);
    }
    if let Ok(id) = reference.parse::<ChallengeId>() {
        return store.get(&id).map(Challenge::id);
    }
    store.find_by_title(reference).map(Challenge::id)
}

/// `3. [*] Solar Explorer (Energy)`, numbered by catalog position.
pub fn summary_line(store: &ChallengeStore, challenge: &Challenge) -> String {
    let position = store
        .list_all()
        .iter()
        .position(|c| c.id() == challenge.id())
        .map_or(0, |i| i + 1);
    let marker = if challenge.is_started() { '*' } else { ' ' };
    format!(
        "{position}. [{marker}] {} ({})",
        challenge.title,
        challenge.category()
    )
}

pub fn print_details(challenge: &Challenge) {
    let category = challenge.category();
    println!("{}", challenge.title);
    println!("Category: {category} ({})", category.icon());
    println!();
    println!("{}", challenge.description);
    println!();
    println!("Why is it good for the planet?");
    println!("{}", challenge.benefits);
    println!();
    println!("Your Challenge:");
    println!("{}", challenge.kid_challenge);
    if challenge.is_started() {
        println!();
        println!("Active Challenge");
    }
}
