//! Reply generation for each intent.
//!
//! Course replies are fully deterministic for a given catalog and filter.
//! College and career replies pick one matching course uniformly at random,
//! and career replies additionally synthesize salary and growth figures per
//! call -- identical queries produce different numbers unless the caller
//! seeds the random source.

use std::time::Duration;

use rand::Rng;

use crate::catalog::{Catalog, CourseRecord, Filter};

use super::intent::{classify, Intent};
use super::replies;

/// Entries shown per multi-entry reply.
pub const MAX_SHOWN: usize = 3;

/// Map one user message + active filter to one reply string.
pub fn respond<R: Rng>(text: &str, filter: &Filter, catalog: &Catalog, rng: &mut R) -> String {
    match classify(text) {
        Intent::Course => course_reply(text, filter, catalog),
        Intent::College => college_reply(text, filter, catalog, rng),
        Intent::Career => career_reply(text, filter, catalog, rng),
        Intent::Greeting => replies::CAPABILITIES.to_string(),
        Intent::Fallback => replies::FALLBACK.to_string(),
    }
}

/// Cosmetic "typing" delay: a fixed minimum plus a uniform random extra.
///
/// Purely presentational; the caller may use zero in tests.
pub fn typing_delay<R: Rng>(rng: &mut R, min_ms: u64, extra_ms: u64) -> Duration {
    let extra = if extra_ms == 0 {
        0
    } else {
        rng.gen_range(0..extra_ms)
    };
    Duration::from_millis(min_ms + extra)
}

fn course_reply(text: &str, filter: &Filter, catalog: &Catalog) -> String {
    let matches = catalog.search(text, filter);
    if matches.is_empty() {
        return replies::NO_COURSES.to_string();
    }

    let shown: Vec<String> = matches
        .iter()
        .take(MAX_SHOWN)
        .map(|c| render_course(c))
        .collect();
    let mut reply = shown.join(replies::ENTRY_DELIMITER);
    if matches.len() > MAX_SHOWN {
        reply.push_str("\n\n");
        reply.push_str(replies::MORE_COURSES);
    }
    reply
}

fn college_reply<R: Rng>(
    text: &str,
    filter: &Filter,
    catalog: &Catalog,
    rng: &mut R,
) -> String {
    let matches = catalog.search(text, filter);
    let Some(course) = pick_random(&matches, rng) else {
        return replies::NO_COLLEGES.to_string();
    };

    let rendered: Vec<String> = course
        .colleges
        .iter()
        .take(MAX_SHOWN)
        .map(render_college)
        .collect();
    format!(
        "Top colleges for {}:\n\n{}",
        course.name,
        rendered.join(replies::ENTRY_DELIMITER)
    )
}

fn career_reply<R: Rng>(
    text: &str,
    filter: &Filter,
    catalog: &Catalog,
    rng: &mut R,
) -> String {
    let matches = catalog.search(text, filter);
    let Some(course) = pick_random(&matches, rng) else {
        return replies::NO_CAREERS.to_string();
    };

    let rendered: Vec<String> = course
        .career_prospects
        .iter()
        .map(|career| render_career(career, rng))
        .collect();
    format!(
        "Career opportunities after {}:\n\n{}\n\n{}",
        course.name,
        rendered.join(replies::ENTRY_DELIMITER),
        replies::CAREER_CLOSING
    )
}

fn pick_random<'a, R: Rng>(
    matches: &[&'a CourseRecord],
    rng: &mut R,
) -> Option<&'a CourseRecord> {
    if matches.is_empty() {
        return None;
    }
    Some(matches[rng.gen_range(0..matches.len())])
}

fn render_course(course: &CourseRecord) -> String {
    format!(
        "{} ({})\n{}\nDuration: {}\nCareer prospects: {}",
        course.name,
        course.level,
        course.description,
        course.duration,
        course.career_prospects.join(", ")
    )
}

fn render_college(college: &crate::catalog::CollegeRecord) -> String {
    format!(
        "{}\nLocation: {}\nRanking: {}\nFeatures: {}",
        college.name,
        college.location,
        college.ranking,
        college.features.join(", ")
    )
}

fn render_career<R: Rng>(career: &str, rng: &mut R) -> String {
    let (low, high) = salary_range(rng);
    let growth = growth_pct(rng);
    format!(
        "{career}\nExpected salary: ${low} - ${high} per year\nProjected growth: {growth}%"
    )
}

/// Synthesized salary range: base in [40000, 100000), span in [20000, 60000).
fn salary_range<R: Rng>(rng: &mut R) -> (u32, u32) {
    let base: u32 = rng.gen_range(40_000..100_000);
    let span: u32 = rng.gen_range(20_000..60_000);
    (base, base + span)
}

/// Synthesized growth percentage in [5, 20).
fn growth_pct<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(5..20)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Field, Level};
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    fn rng() -> Mcg128Xsl64 {
        Mcg128Xsl64::seed_from_u64(42)
    }

    #[test]
    fn zero_match_course_query_returns_exact_apology() {
        let catalog = Catalog::builtin();
        // No certificate-level medicine course exists in the catalog.
        let filter = Filter::new(Some(Level::Certificate), Some(Field::Medicine));
        let reply = respond("course", &filter, &catalog, &mut rng());
        assert_eq!(reply, replies::NO_COURSES);
    }

    #[test]
    fn greeting_mixed_with_course_word_yields_course_reply() {
        let catalog = Catalog::builtin();
        let reply = respond(
            "hello, tell me about a course",
            &Filter::all(),
            &catalog,
            &mut rng(),
        );
        assert_ne!(reply, replies::CAPABILITIES);
        assert!(reply.contains("Duration:"), "{reply}");
    }

    #[test]
    fn course_reply_caps_entries_and_offers_more() {
        let catalog = Catalog::builtin();
        // Token "a" hits every course haystack.
        let reply = respond("show me a course", &Filter::all(), &catalog, &mut rng());
        assert_eq!(
            reply.matches(replies::ENTRY_DELIMITER).count(),
            MAX_SHOWN - 1
        );
        assert!(reply.ends_with(replies::MORE_COURSES));
    }

    #[test]
    fn course_reply_without_overflow_has_no_follow_up() {
        let catalog = Catalog::builtin();
        // Only one diploma course exists.
        let filter = Filter::new(Some(Level::Diploma), None);
        let reply = respond("which diploma course?", &filter, &catalog, &mut rng());
        assert!(reply.contains("Diploma in Pharmacy"));
        assert!(!reply.contains(replies::MORE_COURSES));
    }

    #[test]
    fn college_reply_renders_college_fields() {
        let catalog = Catalog::builtin();
        let filter = Filter::new(Some(Level::Diploma), None);
        let reply = respond(
            "colleges for pharmacy please",
            &filter,
            &catalog,
            &mut rng(),
        );
        assert!(reply.starts_with("Top colleges for Diploma in Pharmacy:"));
        assert!(reply.contains("Location: New Delhi, Delhi"));
        assert!(reply.contains("Ranking:"));
        assert!(reply.contains("Features:"));
    }

    #[test]
    fn college_reply_caps_at_three_colleges() {
        let catalog = Catalog::builtin();
        // Restrict to the one medicine undergraduate course (MBBS, 3 colleges).
        let filter = Filter::new(Some(Level::Undergraduate), Some(Field::Medicine));
        let reply = respond("college for surgery", &filter, &catalog, &mut rng());
        assert!(reply.starts_with("Top colleges for MBBS:"));
        assert_eq!(
            reply.matches(replies::ENTRY_DELIMITER).count(),
            MAX_SHOWN - 1
        );
    }

    #[test]
    fn empty_college_match_apologizes() {
        let catalog = Catalog::builtin();
        let filter = Filter::new(Some(Level::Certificate), Some(Field::Medicine));
        let reply = respond("college", &filter, &catalog, &mut rng());
        assert_eq!(reply, replies::NO_COLLEGES);
    }

    #[test]
    fn career_reply_renders_block_per_prospect() {
        let catalog = Catalog::builtin();
        let filter = Filter::new(Some(Level::Diploma), None);
        let reply = respond(
            "career opportunities in pharmacy",
            &filter,
            &catalog,
            &mut rng(),
        );
        assert!(reply.contains("Pharmacist"));
        assert!(reply.contains("Drug Safety Associate"));
        assert!(reply.ends_with(replies::CAREER_CLOSING));
        assert_eq!(reply.matches(" per year").count(), 2);
        assert_eq!(reply.matches("Projected growth:").count(), 2);
    }

    #[test]
    fn career_salary_lines_are_well_formed() {
        let catalog = Catalog::builtin();
        let filter = Filter::new(Some(Level::Diploma), None);
        let reply = respond("salary in pharmacy", &filter, &catalog, &mut rng());
        for line in reply.lines().filter(|l| l.starts_with("Expected salary:")) {
            let rest = line.trim_start_matches("Expected salary: $");
            let (low, rest) = rest.split_once(" - $").expect("range separator");
            let high = rest.trim_end_matches(" per year");
            let low: u32 = low.parse().unwrap();
            let high: u32 = high.parse().unwrap();
            assert!(low < high);
            assert!((40_000..100_000).contains(&low));
        }
    }

    #[test]
    fn empty_career_match_apologizes() {
        let catalog = Catalog::builtin();
        let filter = Filter::new(Some(Level::Certificate), Some(Field::Medicine));
        let reply = respond("job", &filter, &catalog, &mut rng());
        assert_eq!(reply, replies::NO_CAREERS);
    }

    #[test]
    fn greeting_reply_is_fixed_and_ignores_filter() {
        let catalog = Catalog::builtin();
        let filter = Filter::new(Some(Level::Certificate), Some(Field::Medicine));
        assert_eq!(
            respond("hello", &filter, &catalog, &mut rng()),
            replies::CAPABILITIES
        );
    }

    #[test]
    fn unmatched_message_gets_fallback_prompt() {
        let catalog = Catalog::builtin();
        assert_eq!(
            respond("tell me a poem", &Filter::all(), &catalog, &mut rng()),
            replies::FALLBACK
        );
    }

    #[test]
    fn seeded_rng_makes_replies_reproducible() {
        let catalog = Catalog::builtin();
        let a = respond("what jobs can a graduate get", &Filter::all(), &catalog, &mut rng());
        let b = respond("what jobs can a graduate get", &Filter::all(), &catalog, &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn salary_figures_are_fresh_per_call() {
        let catalog = Catalog::builtin();
        let mut rng = rng();
        let filter = Filter::new(Some(Level::Diploma), None);
        let a = respond("salary in pharmacy", &filter, &catalog, &mut rng);
        let b = respond("salary in pharmacy", &filter, &catalog, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn salary_and_growth_stay_in_bounds() {
        let mut rng = rng();
        for _ in 0..1000 {
            let (low, high) = salary_range(&mut rng);
            assert!((40_000..100_000).contains(&low));
            assert!((low + 20_000..low + 60_000).contains(&high));
            let growth = growth_pct(&mut rng);
            assert!((5..20).contains(&growth));
        }
    }

    #[test]
    fn typing_delay_respects_minimum_and_zero_extra() {
        let mut rng = rng();
        for _ in 0..100 {
            let d = typing_delay(&mut rng, 600, 1200);
            assert!(d >= Duration::from_millis(600));
            assert!(d < Duration::from_millis(1800));
        }
        assert_eq!(typing_delay(&mut rng, 0, 0), Duration::ZERO);
    }
}
