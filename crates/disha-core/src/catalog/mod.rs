//! Static course/college catalog and its read/filter operations.
//!
//! The catalog is loaded once at startup and never mutated. All query
//! operations are pure and infallible: no matches means an empty sequence,
//! never an error.

mod careers;
mod data;

pub use careers::CareerProfile;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Study level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Undergraduate,
    Postgraduate,
    Diploma,
    Certificate,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::Undergraduate,
        Level::Postgraduate,
        Level::Diploma,
        Level::Certificate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Undergraduate => "undergraduate",
            Level::Postgraduate => "postgraduate",
            Level::Diploma => "diploma",
            Level::Certificate => "certificate",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "undergraduate" => Ok(Level::Undergraduate),
            "postgraduate" => Ok(Level::Postgraduate),
            "diploma" => Ok(Level::Diploma),
            "certificate" => Ok(Level::Certificate),
            other => Err(ValidationError::InvalidValue {
                field: "level".to_string(),
                message: format!("'{other}' is not one of undergraduate/postgraduate/diploma/certificate"),
            }),
        }
    }
}

/// Subject field of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Engineering,
    Medicine,
    Business,
    Arts,
    Science,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Engineering,
        Field::Medicine,
        Field::Business,
        Field::Arts,
        Field::Science,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Engineering => "engineering",
            Field::Medicine => "medicine",
            Field::Business => "business",
            Field::Arts => "arts",
            Field::Science => "science",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "engineering" => Ok(Field::Engineering),
            "medicine" => Ok(Field::Medicine),
            "business" => Ok(Field::Business),
            "arts" => Ok(Field::Arts),
            "science" => Ok(Field::Science),
            other => Err(ValidationError::InvalidValue {
                field: "field".to_string(),
                message: format!("'{other}' is not one of engineering/medicine/business/arts/science"),
            }),
        }
    }
}

/// A college offering one or more courses.
///
/// The same college may appear under several courses; entries are
/// value-equal duplicates with no shared identity, de-duplicated by name
/// where the caller needs a flat list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollegeRecord {
    pub name: String,
    /// "district, state/country" convention, free text.
    pub location: String,
    /// Free text, e.g. "#3 NIRF Engineering 2024".
    pub ranking: String,
    pub features: Vec<String>,
}

/// A course in the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    pub name: String,
    pub level: Level,
    pub field: Field,
    /// Free text, e.g. "4 years".
    pub duration: String,
    pub description: String,
    /// Career names, display/lookup only -- no foreign-key enforcement.
    pub career_prospects: Vec<String>,
    pub colleges: Vec<CollegeRecord>,
}

impl CourseRecord {
    /// Lower-cased haystack used by token search:
    /// name + description + field + level.
    fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.description, self.field, self.level
        )
        .to_lowercase()
    }
}

/// Active level + field restriction applied to catalog queries.
///
/// `None` is the wildcard ("all"). Transient UI state, not persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub level: Option<Level>,
    pub field: Option<Field>,
}

impl Filter {
    /// Wildcard filter matching every course.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(level: Option<Level>, field: Option<Field>) -> Self {
        Self { level, field }
    }

    fn matches(&self, course: &CourseRecord) -> bool {
        self.level.map_or(true, |l| course.level == l)
            && self.field.map_or(true, |f| course.field == f)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = self.level.map_or("all", Level::as_str);
        let field = self.field.map_or("all", Field::as_str);
        write!(f, "level={level}, field={field}")
    }
}

/// In-memory, read-only course catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<CourseRecord>,
}

impl Catalog {
    pub fn new(courses: Vec<CourseRecord>) -> Self {
        Self { courses }
    }

    /// The dataset shipped with the application.
    pub fn builtin() -> Self {
        Self::new(data::builtin_courses())
    }

    /// Full ordered course list.
    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    /// Point lookup by course id.
    pub fn course(&self, id: &str) -> Option<&CourseRecord> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Order-preserving subsequence matching the filter.
    pub fn filter(&self, filter: &Filter) -> Vec<&CourseRecord> {
        self.courses.iter().filter(|c| filter.matches(c)).collect()
    }

    /// `filter` further restricted to courses whose lower-cased
    /// name+description+field+level contains at least one lower-cased
    /// whitespace token of `text`.
    ///
    /// Empty or whitespace-only `text` applies no text restriction.
    pub fn search(&self, text: &str, filter: &Filter) -> Vec<&CourseRecord> {
        let lower = text.to_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();
        if tokens.is_empty() {
            return self.filter(filter);
        }
        self.courses
            .iter()
            .filter(|c| filter.matches(c))
            .filter(|c| {
                let haystack = c.search_haystack();
                tokens.iter().any(|t| haystack.contains(t))
            })
            .collect()
    }

    /// Every college across all courses, de-duplicated by name,
    /// first-seen order.
    pub fn unique_colleges(&self) -> Vec<&CollegeRecord> {
        let mut seen: Vec<&CollegeRecord> = Vec::new();
        for course in &self.courses {
            for college in &course.colleges {
                if !seen.iter().any(|c| c.name == college.name) {
                    seen.push(college);
                }
            }
        }
        seen
    }

    /// Point lookup by college name (case-insensitive).
    pub fn college(&self, name: &str) -> Option<&CollegeRecord> {
        let lower = name.to_lowercase();
        self.unique_colleges()
            .into_iter()
            .find(|c| c.name.to_lowercase() == lower)
    }

    /// Every career name referenced by any course, de-duplicated,
    /// first-seen order.
    pub fn career_names(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for course in &self.courses {
            for career in &course.career_prospects {
                if !seen.iter().any(|c| c.eq_ignore_ascii_case(career)) {
                    seen.push(career);
                }
            }
        }
        seen
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_filter_returns_full_catalog_in_order() {
        let catalog = Catalog::builtin();
        let all = catalog.filter(&Filter::all());
        assert_eq!(all.len(), catalog.courses().len());
        for (got, want) in all.iter().zip(catalog.courses()) {
            assert_eq!(got.id, want.id);
        }
    }

    #[test]
    fn level_filter_is_exact_level_subsequence() {
        let catalog = Catalog::builtin();
        for level in Level::ALL {
            let filtered = catalog.filter(&Filter::new(Some(level), None));
            let expected: Vec<&str> = catalog
                .courses()
                .iter()
                .filter(|c| c.level == level)
                .map(|c| c.id.as_str())
                .collect();
            let got: Vec<&str> = filtered.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(got, expected, "level {level}");
        }
    }

    #[test]
    fn combined_filter_requires_both_matches() {
        let catalog = Catalog::builtin();
        let filter = Filter::new(Some(Level::Undergraduate), Some(Field::Engineering));
        for course in catalog.filter(&filter) {
            assert_eq!(course.level, Level::Undergraduate);
            assert_eq!(course.field, Field::Engineering);
        }
    }

    #[test]
    fn empty_search_text_equals_filter() {
        let catalog = Catalog::builtin();
        let filter = Filter::new(None, Some(Field::Business));
        let a: Vec<&str> = catalog
            .search("", &filter)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        let b: Vec<&str> = catalog
            .search("   \t ", &filter)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        let c: Vec<&str> = catalog
            .filter(&filter)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(a, c);
        assert_eq!(b, c);
    }

    #[test]
    fn search_matches_any_token_as_substring() {
        let catalog = Catalog::builtin();
        // "engineer" is a substring of the engineering field string.
        let hits = catalog.search("engineer nonsenseword", &Filter::all());
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|c| c.search_haystack().contains("engineer")));
    }

    #[test]
    fn search_is_subset_of_filter() {
        let catalog = Catalog::builtin();
        let filter = Filter::new(Some(Level::Undergraduate), None);
        let filtered: Vec<&str> = catalog
            .filter(&filter)
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        for course in catalog.search("technology management", &filter) {
            assert!(filtered.contains(&course.id.as_str()));
        }
    }

    #[test]
    fn no_match_yields_empty_not_error() {
        let catalog = Catalog::builtin();
        assert!(catalog
            .search("zzzqqqxxx", &Filter::all())
            .is_empty());
    }

    #[test]
    fn unique_colleges_dedups_by_name_first_seen_order() {
        let catalog = Catalog::builtin();
        let colleges = catalog.unique_colleges();
        for (i, college) in colleges.iter().enumerate() {
            assert!(
                !colleges[..i].iter().any(|c| c.name == college.name),
                "duplicate college name: {}",
                college.name
            );
        }
        // First-seen order: the first course's first college leads the list.
        let first = &catalog.courses()[0].colleges[0];
        assert_eq!(colleges[0].name, first.name);
    }

    #[test]
    fn college_lookup_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let name = catalog.unique_colleges()[0].name.clone();
        assert!(catalog.college(&name.to_uppercase()).is_some());
        assert!(catalog.college("No Such College").is_none());
    }

    #[test]
    fn level_and_field_parse_roundtrip() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
        assert!("doctorate".parse::<Level>().is_err());
        assert!("law".parse::<Field>().is_err());
    }
}
