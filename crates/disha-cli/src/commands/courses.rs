//! Course catalog browsing commands.

use clap::Subcommand;
use disha_core::catalog::{Field, Filter, Level};
use disha_core::Catalog;

#[derive(Subcommand)]
pub enum CourseAction {
    /// List courses
    List {
        /// Filter by level (undergraduate/postgraduate/diploma/certificate)
        #[arg(long)]
        level: Option<Level>,
        /// Filter by subject (engineering/medicine/business/arts/science)
        #[arg(long)]
        field: Option<Field>,
        /// Free-text search over name, description, field and level
        #[arg(long)]
        search: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one course by id
    Show {
        /// Course id (see `courses list`)
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: CourseAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();
    match action {
        CourseAction::List {
            level,
            field,
            search,
            json,
        } => {
            let filter = Filter::new(level, field);
            let courses = match search.as_deref() {
                Some(text) => catalog.search(text, &filter),
                None => catalog.filter(&filter),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&courses)?);
            } else if courses.is_empty() {
                println!("no matching courses");
            } else {
                for course in courses {
                    println!(
                        "{:<24} {} ({}, {}, {})",
                        course.id, course.name, course.level, course.field, course.duration
                    );
                }
            }
        }
        CourseAction::Show { id, json } => {
            let Some(course) = catalog.course(&id) else {
                eprintln!("unknown course id: {id}");
                std::process::exit(1);
            };
            if json {
                println!("{}", serde_json::to_string_pretty(course)?);
            } else {
                println!("{} ({}, {})", course.name, course.level, course.field);
                println!("Duration: {}", course.duration);
                println!("{}", course.description);
                println!("Career prospects: {}", course.career_prospects.join(", "));
                println!("Colleges:");
                for college in &course.colleges {
                    println!("  {} -- {} ({})", college.name, college.location, college.ranking);
                }
            }
        }
    }
    Ok(())
}
