//! Fixed reply text used by the assistant.
//!
//! These strings are part of the observable behavior: tests pin them
//! exactly, so edits here are user-visible wording changes.

use indoc::indoc;

/// First message of every conversation, and the message the log resets to
/// on clear.
pub const OPENING: &str = indoc! {"
    Hi! I'm Disha, your course and career guidance assistant.
    Ask me about courses, colleges, job opportunities or expected salaries
    and I'll point you in the right direction."};

/// Reply to a greeting. Ignores the active filter entirely.
pub const CAPABILITIES: &str = indoc! {"
    Hello! Here's what I can help you with:
    - Courses: degrees, diplomas and certificates that match your interests
    - Colleges: where each course is taught, with rankings and highlights
    - Careers: roles a course can lead to, with salary expectations
    Set a level or subject filter to narrow things down, or just ask away."};

/// Course intent, zero matches.
pub const NO_COURSES: &str = "Sorry, I couldn't find any courses matching \
    your query and filters. Try changing the level or subject filter, or ask \
    in different words.";

/// College intent, zero matching courses.
pub const NO_COLLEGES: &str = "Sorry, I couldn't find colleges to suggest \
    for that query. Try relaxing your filters or asking about a specific \
    course first.";

/// Career intent, zero matching courses.
pub const NO_CAREERS: &str = "Sorry, I couldn't find career information for \
    that query. Try relaxing your filters or asking about a course first.";

/// Appended when a course query matched more than the shown limit.
pub const MORE_COURSES: &str = "There are more matches -- ask me to show \
    more courses if you'd like to keep exploring.";

/// Appended after every career-intent reply.
pub const CAREER_CLOSING: &str = "Would you like to know more about any of \
    these roles, or the courses that lead to them?";

/// No intent matched.
pub const FALLBACK: &str = "I can help you explore courses, colleges, job \
    opportunities and salaries. Try asking something like \"which courses \
    can I study?\" or \"what jobs can I get?\"";

/// Separator between rendered entries in a multi-entry reply.
pub const ENTRY_DELIMITER: &str = "\n\n---\n\n";
