//! Login session management.

use clap::Subcommand;
use disha_core::storage::SessionStore;
use disha_core::UserProfile;

#[derive(Subcommand)]
pub enum AuthAction {
    /// Validate and store a login profile
    Login {
        /// Full name (required)
        #[arg(long)]
        name: String,
        /// Email address (required)
        #[arg(long)]
        email: String,
        /// Education level, e.g. "12th Standard" (required)
        #[arg(long)]
        education_level: String,
        /// Current institution
        #[arg(long, default_value = "")]
        institution: String,
        /// State (required)
        #[arg(long)]
        state: String,
        /// City
        #[arg(long, default_value = "")]
        city: String,
    },
    /// Clear the stored session
    Logout,
    /// Show the current session
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open_default()?;
    match action {
        AuthAction::Login {
            name,
            email,
            education_level,
            institution,
            state,
            city,
        } => {
            let profile = UserProfile {
                name,
                email,
                education_level,
                institution,
                state,
                city,
            };
            let session = store.login(&profile)?;
            println!(
                "logged in as {}",
                session.profile().map(|p| p.name.as_str()).unwrap_or("?")
            );
        }
        AuthAction::Logout => {
            store.logout();
            println!("logged out");
        }
        AuthAction::Status { json } => {
            let session = store.load();
            match session.profile() {
                Some(profile) if json => {
                    println!("{}", serde_json::to_string_pretty(profile)?);
                }
                Some(profile) => {
                    println!("logged in as {} <{}>", profile.name, profile.email);
                }
                None => println!("not logged in"),
            }
        }
    }
    Ok(())
}
