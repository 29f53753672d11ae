//! Career browsing commands.

use clap::Subcommand;
use disha_core::{CareerProfile, Catalog};

#[derive(Subcommand)]
pub enum CareerAction {
    /// List every career referenced by the catalog
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one career by name
    Show {
        /// Career name, case-insensitive
        name: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CareerAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();
    match action {
        CareerAction::List { json } => {
            let names = catalog.career_names();
            if json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                for name in names {
                    println!("{name}");
                }
            }
        }
        CareerAction::Show { name, json } => {
            // Falls back to a generic profile when no detail record exists.
            let profile = CareerProfile::lookup(&name);
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                println!("{}", profile.name);
                println!("{}", profile.summary);
                println!("Key skills: {}", profile.key_skills.join(", "));
                let leads_in: Vec<&str> = catalog
                    .courses()
                    .iter()
                    .filter(|c| {
                        c.career_prospects
                            .iter()
                            .any(|p| p.eq_ignore_ascii_case(&profile.name))
                    })
                    .map(|c| c.name.as_str())
                    .collect();
                if !leads_in.is_empty() {
                    println!("Courses leading here: {}", leads_in.join(", "));
                }
            }
        }
    }
    Ok(())
}
