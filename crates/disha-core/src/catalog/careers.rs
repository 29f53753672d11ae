//! Career detail profiles.
//!
//! Career names on a course are plain strings with no foreign-key
//! enforcement; a lookup miss falls back to a generic default profile so
//! every referenced career can still be displayed.

use indoc::indoc;
use serde::{Deserialize, Serialize};

/// Detail page content for a single career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub name: String,
    pub summary: String,
    pub key_skills: Vec<String>,
}

impl CareerProfile {
    /// Look up a profile by career name (case-insensitive), falling back to
    /// a generic entry when no detail record exists.
    pub fn lookup(name: &str) -> CareerProfile {
        builtin_profiles()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .unwrap_or_else(|| CareerProfile::generic(name))
    }

    /// Generic fallback entry for careers without a detail record.
    pub fn generic(name: &str) -> CareerProfile {
        CareerProfile {
            name: name.to_string(),
            summary: format!(
                "{name} is a growing career path. Detailed information for \
                 this role is not available yet; explore related courses to \
                 learn which programmes lead into it."
            ),
            key_skills: vec![
                "Communication".to_string(),
                "Problem solving".to_string(),
                "Continuous learning".to_string(),
            ],
        }
    }
}

fn profile(name: &str, summary: &str, key_skills: &[&str]) -> CareerProfile {
    CareerProfile {
        name: name.to_string(),
        summary: summary.trim().replace('\n', " "),
        key_skills: key_skills.iter().map(|s| s.to_string()).collect(),
    }
}

/// Careers with hand-written detail records.
pub(crate) fn builtin_profiles() -> Vec<CareerProfile> {
    vec![
        profile(
            "Software Engineer",
            indoc! {"
                Designs, builds and maintains software systems, from web
                applications to embedded platforms. One of the most
                consistently in-demand roles across every industry."},
            &["Programming", "System design", "Debugging", "Collaboration"],
        ),
        profile(
            "Data Scientist",
            indoc! {"
                Extracts insight from data using statistics and machine
                learning, and communicates findings that drive product and
                business decisions."},
            &["Statistics", "Python/R", "Machine learning", "Storytelling"],
        ),
        profile(
            "Physician",
            indoc! {"
                Diagnoses and treats illness in clinical practice. Requires
                MBBS registration and typically postgraduate specialisation."},
            &["Clinical knowledge", "Empathy", "Decision making under pressure"],
        ),
        profile(
            "Pharmacist",
            indoc! {"
                Dispenses medication, counsels patients on safe use and
                manages pharmacy operations in retail or hospital settings."},
            &["Pharmacology", "Attention to detail", "Patient counselling"],
        ),
        profile(
            "Management Consultant",
            indoc! {"
                Advises organisations on strategy, operations and
                transformation, usually moving between client engagements in
                small case teams."},
            &["Structured problem solving", "Presentation", "Financial modelling"],
        ),
        profile(
            "Business Analyst",
            indoc! {"
                Bridges business stakeholders and delivery teams, turning
                goals into requirements and measuring outcomes."},
            &["Requirements analysis", "SQL", "Stakeholder management"],
        ),
        profile(
            "Content Writer",
            indoc! {"
                Produces articles, copy and documentation for publications
                and brands across print and digital media."},
            &["Writing", "Research", "SEO basics", "Editing"],
        ),
        profile(
            "Research Scientist",
            indoc! {"
                Conducts original research in academic, government or
                industrial labs, publishing results and securing grants."},
            &["Experimental design", "Scientific writing", "Data analysis"],
        ),
        profile(
            "Digital Marketer",
            indoc! {"
                Plans and runs online campaigns across search, social and
                email channels, optimising against measurable goals."},
            &["Campaign analytics", "Copywriting", "Paid advertising"],
        ),
        profile(
            "Investment Banker",
            indoc! {"
                Advises on mergers, acquisitions and capital raising;
                demanding hours with strong compensation at top firms."},
            &["Valuation", "Financial modelling", "Negotiation"],
        ),
    ]
}
