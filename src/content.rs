//! Static page content.

use std::collections::BTreeSet;

use crate::catalog::{Categorized, CategoryOption, ALL};

pub const NAME: &str = "Fiza Begum";
pub const INITIALS: &str = "FB";
pub const EMAIL: &str = "mkfizakhan@gmail.com";
pub const GITHUB: &str = "https://github.com/FizaBegum";
pub const LOCATION: &str = "Trichy, Tamil Nadu, India";

pub static TAGLINES: [&str; 3] = ["Full-Stack Developer", "UI/UX Designer", "AWS Certified"];

pub const SUMMARY: &str = "Highly motivated Computer Science student with experience in full-stack development and automation. Skilled in writing clean, testable code and eager to contribute to high performance software while learning advanced technologies.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static HIGHLIGHTS: [Highlight; 4] = [
    Highlight {
        icon: "extra-code",
        title: "Full-Stack Development",
        description: "Experienced in building responsive web applications using modern technologies",
    },
    Highlight {
        icon: "extra-palette",
        title: "UI/UX Design",
        description: "Creating intuitive and beautiful user interfaces with tools like Figma",
    },
    Highlight {
        icon: "extra-server",
        title: "Backend Development",
        description: "Proficient in Python, Node.js, and database management",
    },
    Highlight {
        icon: "extra-cloud",
        title: "Cloud Technologies",
        description: "AWS Certified Cloud Practitioner with hands-on experience",
    },
];

pub static JOURNEY: [&str; 2] = [
    "I'm a Computer Science student at K. Ramakrishnan College of Engineering with a passion for technology and innovation. My journey began with curiosity about how software works and has evolved into a deep commitment to creating meaningful digital experiences.",
    "Through various internships and projects, I've gained hands-on experience in full-stack development, automation, and cloud technologies. I believe in writing clean, maintainable code and always strive to learn the latest industry best practices.",
];

pub static LANGUAGES: [&str; 4] = ["English", "Hindi", "Urdu", "Tamil"];

/// Headline number with a caption, used in the stat rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: String,
    pub label: &'static str,
}

impl Stat {
    pub fn new(value: impl ToString, label: &'static str) -> Self {
        Self {
            value: value.to_string(),
            label,
        }
    }
}

pub fn about_stats() -> Vec<Stat> {
    vec![
        Stat::new("7.51", "CGPA"),
        Stat::new(format!("{}+", PROJECTS.len()), "Projects"),
        Stat::new(format!("{}+", CERTIFICATIONS.len()), "Certifications"),
        Stat::new(
            EXPERIENCES
                .iter()
                .filter(|e| e.kind == "Internship")
                .count(),
            "Internships",
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

pub static EXPERIENCES: [Experience; 2] = [
    Experience {
        title: "Python Development Intern",
        company: "CODEBINDS TECHNOLOGY",
        period: "July 2024",
        location: "Remote",
        kind: "Internship",
        description: "Focused on Python-based automation and problem-solving solutions",
        achievements: &[
            "Created Python-based solutions to automate daily tasks and address real-world challenges",
            "Strengthened problem-solving abilities through scripting, debugging and optimization",
            "Developed efficient algorithms to improve workflow automation",
            "Collaborated with team members on code reviews and best practices",
        ],
    },
    Experience {
        title: "Web Development Intern",
        company: "CODEBINDS TECHNOLOGY",
        period: "January 2024",
        location: "Remote",
        kind: "Internship",
        description: "Focused on responsive web development and UI/UX enhancement",
        achievements: &[
            "Developed responsive and user-friendly web pages with HTML and CSS",
            "Enhanced UI designs by collaborating with cross-functional teams, ensuring a seamless user experience",
            "Implemented modern CSS techniques for better visual appeal",
            "Participated in code reviews and learned industry best practices",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activity {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub static ACTIVITIES: [Activity; 4] = [
    Activity {
        title: "Workshop Participant",
        organization: "National Institute of Technology",
        period: "2023-2024",
        description: "Attended technical workshops on emerging technologies",
    },
    Activity {
        title: "Workshop Participant",
        organization: "K. Ramakrishnan College of Engineering",
        period: "2023-2024",
        description: "Participated in college-organized technical workshops",
    },
    Activity {
        title: "Hackathon Participant",
        organization: "Bannari Amman Institute of Technology",
        period: "2023",
        description: "Competed in coding challenges and innovation contests",
    },
    Activity {
        title: "Hackathon Participant",
        organization: "Sastra Deemed University",
        period: "2023",
        description: "Participated in problem-solving competitions",
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
}

impl Categorized for Project {
    fn category(&self) -> &str {
        self.category
    }
}

pub static PROJECT_CATEGORIES: [CategoryOption; 4] = [
    CategoryOption {
        id: ALL,
        label: "All Projects",
    },
    CategoryOption {
        id: "web",
        label: "Web Development",
    },
    CategoryOption {
        id: "python",
        label: "Python Projects",
    },
    CategoryOption {
        id: "design",
        label: "UI/UX Design",
    },
];

pub static PROJECTS: [Project; 6] = [
    Project {
        title: "Task Management App",
        description: "A comprehensive task management application built with ReactJS and Node.JS featuring CRUD functionality, task tracking, and deadline management.",
        category: "web",
        icon: "extra-check-square",
        technologies: &["ReactJS", "Node.JS", "JavaScript", "CSS"],
        features: &[
            "CRUD functionality for task management",
            "Real-time task tracking and updates",
            "Deadline management with notifications",
            "Responsive design for all devices",
        ],
    },
    Project {
        title: "Gamified Learning Platform",
        description: "An interactive learning platform developed using Python and Pygame to enhance education through engaging, practical experiences.",
        category: "python",
        icon: "extra-gamepad",
        technologies: &["Python", "Pygame", "Game Development"],
        features: &[
            "Interactive learning modules",
            "Gamification elements for engagement",
            "Progress tracking system",
            "Multiple learning categories",
        ],
    },
    Project {
        title: "Quiz Game Application",
        description: "An interactive quiz game designed using Python with dynamic questions, real-time scoring, and enhanced user participation features.",
        category: "python",
        icon: "extra-brain",
        technologies: &["Python", "Tkinter", "JSON"],
        features: &[
            "Dynamic question generation",
            "Real-time scoring system",
            "Multiple quiz categories",
            "User-friendly interface",
        ],
    },
    Project {
        title: "College Management System",
        description: "A comprehensive web application using HTML and CSS that automates college administration tasks, improving efficiency and accessibility.",
        category: "web",
        icon: "extra-graduation-cap",
        technologies: &["HTML", "CSS", "JavaScript"],
        features: &[
            "Student information management",
            "Course registration system",
            "Faculty management portal",
            "Responsive web design",
        ],
    },
    Project {
        title: "Velvet Boutique - UI/UX Design",
        description: "A responsive e-commerce UI design created using Figma with intuitive navigation and brand consistency for enhanced user experience.",
        category: "design",
        icon: "extra-palette",
        technologies: &["Figma", "UI/UX Design", "Prototyping"],
        features: &[
            "Responsive e-commerce design",
            "Intuitive user navigation",
            "Brand consistency throughout",
            "Mobile-first approach",
        ],
    },
    Project {
        title: "Netflix & Spotify Clone - UI/UX",
        description: "High-fidelity streaming app prototypes using Figma with improved usability and visual appeal through strong UI/UX design practices.",
        category: "design",
        icon: "extra-code",
        technologies: &["Figma", "UI/UX Design", "Prototyping"],
        features: &[
            "High-fidelity prototypes",
            "Streaming app interface design",
            "Enhanced visual appeal",
            "User experience optimization",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertStatus {
    Active,
    Completed,
}

impl CertStatus {
    pub fn label(self) -> &'static str {
        match self {
            CertStatus::Active => "Active",
            CertStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: u16,
    pub category: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub featured: bool,
    pub status: CertStatus,
}

impl Categorized for Certification {
    fn category(&self) -> &str {
        self.category
    }
}

pub static CERTIFICATION_CATEGORIES: [CategoryOption; 4] = [
    CategoryOption {
        id: ALL,
        label: "All Certifications",
    },
    CategoryOption {
        id: "cloud",
        label: "Cloud Computing",
    },
    CategoryOption {
        id: "programming",
        label: "Programming",
    },
    CategoryOption {
        id: "technology",
        label: "Technology",
    },
];

pub static CERTIFICATIONS: [Certification; 4] = [
    Certification {
        title: "AWS Certified Cloud Practitioner",
        issuer: "Amazon Web Services (AWS)",
        year: 2025,
        category: "cloud",
        description: "Foundational AWS cloud knowledge including core services, security, and pricing models.",
        skills: &["Cloud Computing", "AWS Services", "Cloud Security", "Cost Management"],
        featured: true,
        status: CertStatus::Active,
    },
    Certification {
        title: "Java Development",
        issuer: "Udemy",
        year: 2024,
        category: "programming",
        description: "Comprehensive Java programming course covering OOP principles and application development.",
        skills: &[
            "Java Programming",
            "Object-Oriented Programming",
            "Data Structures",
            "Algorithms",
        ],
        featured: false,
        status: CertStatus::Completed,
    },
    Certification {
        title: "Internet of Things",
        issuer: "NPTEL",
        year: 2024,
        category: "technology",
        description: "Understanding IoT concepts, sensors, connectivity, and smart device development.",
        skills: &["IoT Concepts", "Sensor Networks", "Embedded Systems", "Smart Devices"],
        featured: false,
        status: CertStatus::Completed,
    },
    Certification {
        title: "Cloud Computing",
        issuer: "NPTEL",
        year: 2024,
        category: "cloud",
        description: "Comprehensive understanding of cloud computing models, services, and deployment strategies.",
        skills: &[
            "Cloud Models",
            "Virtualization",
            "Cloud Services",
            "Deployment Strategies",
        ],
        featured: false,
        status: CertStatus::Completed,
    },
];

/// Summary row under the certification grid, computed from the catalog.
pub fn certification_stats(certs: &[Certification]) -> Vec<Stat> {
    let active = certs
        .iter()
        .filter(|c| c.status == CertStatus::Active)
        .count();
    let latest = certs
        .iter()
        .map(|c| c.year)
        .max()
        .map(|y| y.to_string())
        .unwrap_or_else(|| "-".to_string());
    let areas = certs.iter().map(|c| c.category).collect::<BTreeSet<_>>();
    vec![
        Stat::new(certs.len(), "Total Certifications"),
        Stat::new(active, "Active Certifications"),
        Stat::new(latest, "Most Recent Year"),
        Stat::new(areas.len(), "Skill Areas"),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillGroup {
    pub icon: &'static str,
    pub title: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub static SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        icon: "extra-code",
        title: "Programming Languages",
        skills: &[skill("JavaScript", 75), skill("Java", 80), skill("C", 75)],
    },
    SkillGroup {
        icon: "extra-server",
        title: "Web Technologies",
        skills: &[
            skill("ReactJS", 85),
            skill("HTML/CSS", 90),
            skill("Node.JS", 80),
            skill("Responsive Design", 88),
        ],
    },
    SkillGroup {
        icon: "extra-palette",
        title: "Design & Tools",
        skills: &[
            skill("Figma", 85),
            skill("UI/UX Design", 82),
            skill("Pygame", 50),
            skill("Prototyping", 80),
        ],
    },
    SkillGroup {
        icon: "extra-cloud",
        title: "Cloud & DevOps",
        skills: &[
            skill("AWS", 78),
            skill("Cloud Computing", 75),
            skill("SDLC", 80),
            skill("Debugging", 85),
        ],
    },
];

pub static SOFT_SKILLS: [&str; 8] = [
    "Time Management",
    "Communication",
    "Leadership",
    "Team Collaboration",
    "Problem Solving",
    "Critical Thinking",
    "Adaptability",
    "Project Management",
];

pub fn skill_stats() -> Vec<Stat> {
    vec![
        Stat::new("8+", "Programming Languages & Technologies"),
        Stat::new("5+", "Development Tools & Frameworks"),
        Stat::new("3+", "Years of Learning & Development"),
    ]
}

/// Delay before the skill bars grow to their level.
pub const SKILL_BAR_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EDUCATION: [Education; 3] = [
    Education {
        degree: "Bachelor of Engineering in Computer Science",
        institution: "K. Ramakrishnan College of Engineering",
        period: "2022 - 2026",
        grade: "7.51 CGPA (Till 5th Semester)",
        description: "Currently pursuing B.E. in Computer Science Engineering with focus on software development, algorithms, and modern technologies.",
        highlights: &[
            "Strong academic performance with 7.51 CGPA",
            "Active participation in technical workshops",
            "Completed multiple programming projects",
            "Member of technical societies",
        ],
    },
    Education {
        degree: "Higher Secondary Certificate (HSC)",
        institution: "Samadh Senior Secondary School",
        period: "2021 - 2022",
        grade: "Completed",
        description: "Completed higher secondary education with focus on science subjects.",
        highlights: &[
            "Science stream with Mathematics",
            "Strong foundation in analytical thinking",
            "Participated in academic competitions",
            "Developed interest in technology",
        ],
    },
    Education {
        degree: "Secondary School Leaving Certificate (SSLC)",
        institution: "Samadh Senior Secondary School",
        period: "2019 - 2020",
        grade: "Completed",
        description: "Completed secondary education with excellent academic performance.",
        highlights: &[
            "Well-rounded academic performance",
            "Active in extracurricular activities",
            "Developed leadership skills",
            "Foundation for technical interest",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter_by_category;

    #[test]
    fn test_project_categories_cover_catalog() {
        let total: usize = PROJECT_CATEGORIES
            .iter()
            .filter(|c| c.id != ALL)
            .map(|c| filter_by_category(&PROJECTS, c.id).len())
            .sum();
        assert_eq!(total, PROJECTS.len());
        assert_eq!(PROJECT_CATEGORIES[0].id, ALL);
    }

    #[test]
    fn test_certification_categories_cover_catalog() {
        let total: usize = CERTIFICATION_CATEGORIES
            .iter()
            .filter(|c| c.id != ALL)
            .map(|c| filter_by_category(&CERTIFICATIONS, c.id).len())
            .sum();
        assert_eq!(total, CERTIFICATIONS.len());
    }

    #[test]
    fn test_certification_stats() {
        let stats = certification_stats(&CERTIFICATIONS);
        let values = stats.iter().map(|s| s.value.as_str()).collect::<Vec<_>>();
        assert_eq!(values, vec!["4", "1", "2025", "3"]);
    }

    #[test]
    fn test_certification_stats_empty() {
        let stats = certification_stats(&[]);
        assert_eq!(stats[0].value, "0");
        assert_eq!(stats[2].value, "-");
    }

    #[test]
    fn test_about_stats_track_content() {
        let stats = about_stats();
        assert_eq!(stats[1].value, "6+");
        assert_eq!(stats[2].value, "4+");
        assert_eq!(stats[3].value, "2");
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(SKILL_GROUPS
            .iter()
            .flat_map(|g| g.skills)
            .all(|s| s.level <= 100));
    }
}
