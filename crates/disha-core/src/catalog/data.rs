//! Built-in course dataset.
//!
//! Constructed in code, loaded once at startup and never mutated. College
//! entries are intentionally repeated across courses where an institution
//! offers more than one programme; de-duplication happens at query time.

use super::{CollegeRecord, CourseRecord, Field, Level};

fn college(name: &str, location: &str, ranking: &str, features: &[&str]) -> CollegeRecord {
    CollegeRecord {
        name: name.to_string(),
        location: location.to_string(),
        ranking: ranking.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

fn iit_delhi() -> CollegeRecord {
    college(
        "IIT Delhi",
        "Hauz Khas, Delhi",
        "#2 NIRF Engineering 2024",
        &[
            "Top-tier research labs",
            "Strong placement record",
            "Active startup incubator",
        ],
    )
}

fn bits_pilani() -> CollegeRecord {
    college(
        "BITS Pilani",
        "Pilani, Rajasthan",
        "#20 NIRF Overall 2024",
        &[
            "Flexible dual-degree system",
            "No attendance requirement",
            "Practice School internships",
        ],
    )
}

fn iim_ahmedabad() -> CollegeRecord {
    college(
        "IIM Ahmedabad",
        "Vastrapur, Gujarat",
        "#1 NIRF Management 2024",
        &[
            "Case-method teaching",
            "Highest average placements in India",
            "Global exchange partnerships",
        ],
    )
}

/// The full built-in catalog, in display order.
pub fn builtin_courses() -> Vec<CourseRecord> {
    vec![
        CourseRecord {
            id: "btech-cse".to_string(),
            name: "B.Tech Computer Science".to_string(),
            level: Level::Undergraduate,
            field: Field::Engineering,
            duration: "4 years".to_string(),
            description: "Bachelor of Technology in Computer Science and \
                Engineering. Covers programming, data structures, operating \
                systems, databases, machine learning and software engineering \
                practice."
                .to_string(),
            career_prospects: vec![
                "Software Engineer".to_string(),
                "Data Scientist".to_string(),
                "Systems Analyst".to_string(),
                "Product Manager".to_string(),
            ],
            colleges: vec![
                iit_delhi(),
                college(
                    "IIT Bombay",
                    "Powai, Maharashtra",
                    "#3 NIRF Engineering 2024",
                    &[
                        "Renowned CSE department",
                        "Vibrant technical festivals",
                        "Strong alumni network",
                    ],
                ),
                college(
                    "NIT Trichy",
                    "Tiruchirappalli, Tamil Nadu",
                    "#9 NIRF Engineering 2024",
                    &[
                        "Excellent core placements",
                        "Large residential campus",
                    ],
                ),
                bits_pilani(),
            ],
        },
        CourseRecord {
            id: "btech-mech".to_string(),
            name: "B.Tech Mechanical Engineering".to_string(),
            level: Level::Undergraduate,
            field: Field::Engineering,
            duration: "4 years".to_string(),
            description: "Bachelor of Technology in Mechanical Engineering. \
                Thermodynamics, manufacturing, design and automation with \
                hands-on workshop training."
                .to_string(),
            career_prospects: vec![
                "Design Engineer".to_string(),
                "Production Engineer".to_string(),
                "Automotive Engineer".to_string(),
            ],
            colleges: vec![
                iit_delhi(),
                college(
                    "IIT Madras",
                    "Chennai, Tamil Nadu",
                    "#1 NIRF Engineering 2024",
                    &[
                        "Best-ranked engineering institute",
                        "Deep industry research ties",
                    ],
                ),
            ],
        },
        CourseRecord {
            id: "mtech-ai".to_string(),
            name: "M.Tech Artificial Intelligence".to_string(),
            level: Level::Postgraduate,
            field: Field::Engineering,
            duration: "2 years".to_string(),
            description: "Master of Technology specialising in artificial \
                intelligence: deep learning, natural language processing, \
                computer vision and a research thesis."
                .to_string(),
            career_prospects: vec![
                "Machine Learning Engineer".to_string(),
                "Research Scientist".to_string(),
                "Data Scientist".to_string(),
            ],
            colleges: vec![
                iit_delhi(),
                college(
                    "IISc Bangalore",
                    "Bengaluru, Karnataka",
                    "#1 NIRF Overall 2024",
                    &[
                        "Premier research institution",
                        "Small cohorts, close mentorship",
                    ],
                ),
            ],
        },
        CourseRecord {
            id: "mbbs".to_string(),
            name: "MBBS".to_string(),
            level: Level::Undergraduate,
            field: Field::Medicine,
            duration: "5.5 years (including internship)".to_string(),
            description: "Bachelor of Medicine and Bachelor of Surgery. \
                Pre-clinical, para-clinical and clinical phases followed by a \
                compulsory rotating internship."
                .to_string(),
            career_prospects: vec![
                "Physician".to_string(),
                "Surgeon".to_string(),
                "Medical Researcher".to_string(),
            ],
            colleges: vec![
                college(
                    "AIIMS Delhi",
                    "Ansari Nagar, Delhi",
                    "#1 NIRF Medical 2024",
                    &[
                        "India's top medical school",
                        "Attached 2500-bed teaching hospital",
                        "Nominal tuition fees",
                    ],
                ),
                college(
                    "CMC Vellore",
                    "Vellore, Tamil Nadu",
                    "#3 NIRF Medical 2024",
                    &[
                        "Strong community medicine focus",
                        "Mission-run teaching hospital",
                    ],
                ),
                college(
                    "AFMC Pune",
                    "Pune, Maharashtra",
                    "#10 NIRF Medical 2024",
                    &[
                        "Armed forces sponsorship",
                        "Guaranteed service placement",
                    ],
                ),
            ],
        },
        CourseRecord {
            id: "dpharm".to_string(),
            name: "Diploma in Pharmacy".to_string(),
            level: Level::Diploma,
            field: Field::Medicine,
            duration: "2 years".to_string(),
            description: "Entry-level pharmacy qualification covering \
                pharmaceutics, pharmacology and dispensing practice, with \
                registration eligibility as a pharmacist."
                .to_string(),
            career_prospects: vec![
                "Pharmacist".to_string(),
                "Drug Safety Associate".to_string(),
            ],
            colleges: vec![
                college(
                    "Jamia Hamdard",
                    "New Delhi, Delhi",
                    "#1 NIRF Pharmacy 2024",
                    &[
                        "Top-ranked pharmacy school",
                        "In-house hospital pharmacy training",
                    ],
                ),
                college(
                    "Manipal College of Pharmaceutical Sciences",
                    "Manipal, Karnataka",
                    "#7 NIRF Pharmacy 2024",
                    &["Modern labs", "Industry internship tie-ups"],
                ),
            ],
        },
        CourseRecord {
            id: "bba".to_string(),
            name: "BBA".to_string(),
            level: Level::Undergraduate,
            field: Field::Business,
            duration: "3 years".to_string(),
            description: "Bachelor of Business Administration. Management \
                fundamentals, accounting, marketing and organisational \
                behaviour with summer internships."
                .to_string(),
            career_prospects: vec![
                "Business Analyst".to_string(),
                "Marketing Executive".to_string(),
                "HR Manager".to_string(),
            ],
            colleges: vec![
                college(
                    "Christ University",
                    "Bengaluru, Karnataka",
                    "#60 NIRF Overall 2024",
                    &["Strong corporate connect", "Urban campus"],
                ),
                college(
                    "NMIMS Mumbai",
                    "Vile Parle, Maharashtra",
                    "#21 NIRF Management 2024",
                    &["Finance-heavy curriculum", "Mumbai placement market"],
                ),
                college(
                    "Symbiosis Pune",
                    "Pune, Maharashtra",
                    "#32 NIRF Overall 2024",
                    &["Liberal campus culture", "Wide elective choice"],
                ),
            ],
        },
        CourseRecord {
            id: "mba".to_string(),
            name: "MBA".to_string(),
            level: Level::Postgraduate,
            field: Field::Business,
            duration: "2 years".to_string(),
            description: "Master of Business Administration. General \
                management with electives in finance, marketing, operations \
                and strategy; admission via CAT/GMAT."
                .to_string(),
            career_prospects: vec![
                "Management Consultant".to_string(),
                "Investment Banker".to_string(),
                "Operations Manager".to_string(),
                "Product Manager".to_string(),
            ],
            colleges: vec![
                iim_ahmedabad(),
                college(
                    "IIM Bangalore",
                    "Bannerghatta Road, Karnataka",
                    "#2 NIRF Management 2024",
                    &["Strong consulting placements", "NSRCEL incubator"],
                ),
                college(
                    "XLRI Jamshedpur",
                    "Jamshedpur, Jharkhand",
                    "#8 NIRF Management 2024",
                    &["Premier HR programme", "Oldest B-school in India"],
                ),
                bits_pilani(),
            ],
        },
        CourseRecord {
            id: "ba-english".to_string(),
            name: "BA English Literature".to_string(),
            level: Level::Undergraduate,
            field: Field::Arts,
            duration: "3 years".to_string(),
            description: "Bachelor of Arts in English Literature. Literary \
                criticism, linguistics, creative and professional writing \
                across classic and contemporary texts."
                .to_string(),
            career_prospects: vec![
                "Content Writer".to_string(),
                "Journalist".to_string(),
                "Civil Services Officer".to_string(),
            ],
            colleges: vec![
                college(
                    "St. Stephen's College",
                    "North Campus, Delhi",
                    "#14 NIRF Colleges 2024",
                    &["Selective admissions", "Historic campus"],
                ),
                college(
                    "Lady Shri Ram College",
                    "Lajpat Nagar, Delhi",
                    "#9 NIRF Colleges 2024",
                    &["Premier women's college", "Strong humanities faculty"],
                ),
            ],
        },
        CourseRecord {
            id: "bsc-physics".to_string(),
            name: "B.Sc Physics".to_string(),
            level: Level::Undergraduate,
            field: Field::Science,
            duration: "3 years".to_string(),
            description: "Bachelor of Science in Physics. Mechanics, \
                electromagnetism, quantum physics and laboratory work; a \
                gateway to research and teaching careers."
                .to_string(),
            career_prospects: vec![
                "Research Scientist".to_string(),
                "Lab Technician".to_string(),
                "Science Teacher".to_string(),
            ],
            colleges: vec![
                college(
                    "Hindu College",
                    "North Campus, Delhi",
                    "#2 NIRF Colleges 2024",
                    &["Strong science departments", "Research-active faculty"],
                ),
                college(
                    "Loyola College",
                    "Chennai, Tamil Nadu",
                    "#5 NIRF Colleges 2024",
                    &["Autonomous curriculum", "Well-equipped labs"],
                ),
            ],
        },
        CourseRecord {
            id: "msc-data-science".to_string(),
            name: "M.Sc Data Science".to_string(),
            level: Level::Postgraduate,
            field: Field::Science,
            duration: "2 years".to_string(),
            description: "Master of Science in Data Science. Statistics, \
                machine learning, big data engineering and a capstone \
                industry project."
                .to_string(),
            career_prospects: vec![
                "Data Scientist".to_string(),
                "Data Engineer".to_string(),
                "Business Analyst".to_string(),
            ],
            colleges: vec![
                college(
                    "Chennai Mathematical Institute",
                    "Chennai, Tamil Nadu",
                    "Deemed university",
                    &["Mathematics-first curriculum", "Small research cohorts"],
                ),
                iit_delhi(),
            ],
        },
        CourseRecord {
            id: "cert-digital-marketing".to_string(),
            name: "Certificate in Digital Marketing".to_string(),
            level: Level::Certificate,
            field: Field::Business,
            duration: "6 months".to_string(),
            description: "Short professional certificate covering SEO, \
                social media strategy, performance advertising and web \
                analytics with live campaign practice."
                .to_string(),
            career_prospects: vec![
                "Digital Marketer".to_string(),
                "SEO Analyst".to_string(),
                "Social Media Manager".to_string(),
            ],
            colleges: vec![
                college(
                    "MICA Ahmedabad",
                    "Shela, Gujarat",
                    "Top-ranked communications school",
                    &["Marketing specialisation", "Industry-taught modules"],
                ),
                iim_ahmedabad(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_course_ids_are_unique() {
        let courses = builtin_courses();
        for (i, course) in courses.iter().enumerate() {
            assert!(
                !courses[..i].iter().any(|c| c.id == course.id),
                "duplicate id {}",
                course.id
            );
        }
    }

    #[test]
    fn builtin_courses_are_complete_records() {
        for course in builtin_courses() {
            assert!(!course.name.is_empty());
            assert!(!course.duration.is_empty());
            assert!(!course.description.is_empty());
            assert!(!course.career_prospects.is_empty(), "{}", course.id);
            assert!(!course.colleges.is_empty(), "{}", course.id);
            for college in &course.colleges {
                assert!(college.location.contains(','), "{}", college.name);
                assert!(!college.features.is_empty(), "{}", college.name);
            }
        }
    }

    #[test]
    fn every_level_and_field_is_represented() {
        let courses = builtin_courses();
        for level in Level::ALL {
            assert!(courses.iter().any(|c| c.level == level), "{level}");
        }
        for field in Field::ALL {
            assert!(courses.iter().any(|c| c.field == field), "{field}");
        }
    }
}
