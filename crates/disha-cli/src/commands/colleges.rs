//! College browsing commands.

use clap::Subcommand;
use disha_core::Catalog;

#[derive(Subcommand)]
pub enum CollegeAction {
    /// List all colleges (de-duplicated, catalog order)
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one college by name
    Show {
        /// College name, case-insensitive
        name: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CollegeAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();
    match action {
        CollegeAction::List { json } => {
            let colleges = catalog.unique_colleges();
            if json {
                println!("{}", serde_json::to_string_pretty(&colleges)?);
            } else {
                for college in colleges {
                    println!("{:<40} {}", college.name, college.location);
                }
            }
        }
        CollegeAction::Show { name, json } => {
            let Some(college) = catalog.college(&name) else {
                eprintln!("unknown college: {name}");
                std::process::exit(1);
            };
            if json {
                println!("{}", serde_json::to_string_pretty(college)?);
            } else {
                println!("{}", college.name);
                println!("Location: {}", college.location);
                println!("Ranking: {}", college.ranking);
                println!("Features: {}", college.features.join(", "));
                let offering: Vec<&str> = catalog
                    .courses()
                    .iter()
                    .filter(|c| c.colleges.iter().any(|k| k.name == college.name))
                    .map(|c| c.name.as_str())
                    .collect();
                println!("Courses: {}", offering.join(", "));
            }
        }
    }
    Ok(())
}
