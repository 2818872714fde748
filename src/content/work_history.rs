//! Work-experience timeline data.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkKind {
    Current,
    Previous,
    Freelance,
}

impl WorkKind {
    /// Badge label shown on the card.
    pub fn label(self) -> &'static str {
        match self {
            WorkKind::Current => "Current",
            WorkKind::Previous => "Previous",
            WorkKind::Freelance => "Freelance",
        }
    }
}

pub struct WorkExperience {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub kind: WorkKind,
    pub bullets: &'static [&'static str],
}

pub fn work_history() -> Vec<WorkExperience> {
    vec![
        WorkExperience {
            title: "Full Stack Developer",
            company: "KAIRO Lab (freelance contract)",
            duration: "June 2025 – Present",
            kind: WorkKind::Current,
            bullets: &[
                "Building AI-assisted code review tooling with a React frontend and Python services.",
                "Designing PostgreSQL schemas and retrieval pipelines for model context assembly.",
                "Running workloads on AWS Lambda, S3, and API Gateway with infrastructure as code.",
                "Profiling and tuning hot paths, cutting median API latency by roughly 40%.",
            ],
        },
        WorkExperience {
            title: "Frontend Developer",
            company: "Independent clients",
            duration: "April 2024 – May 2025",
            kind: WorkKind::Freelance,
            bullets: &[
                "Delivered responsive marketing and dashboard frontends in React and Vue.",
                "Turned design mockups into maintainable component libraries.",
                "Improved load times with code splitting, lazy loading, and asset budgets.",
                "Kept projects accessible to WCAG AA and working across browsers.",
            ],
        },
        WorkExperience {
            title: "Senior Backend Developer",
            company: "Harima Digital Works, Kobe",
            duration: "March 2022 – March 2024",
            kind: WorkKind::Previous,
            bullets: &[
                "Owned Node.js and Python services behind a logistics tracking platform.",
                "Optimized PostgreSQL and MongoDB workloads for reliability under seasonal peaks.",
                "Moved deployments to containerized microservices on AWS and GCP.",
                "Introduced CI/CD pipelines with GitHub Actions, halving release turnaround.",
            ],
        },
        WorkExperience {
            title: "Full Stack Developer",
            company: "Harima Digital Works, Kobe",
            duration: "January 2020 – March 2022",
            kind: WorkKind::Previous,
            bullets: &[
                "Built customer-facing features across React frontends and Flask backends.",
                "Designed REST APIs consumed by web and mobile clients.",
                "Maintained database migrations and data-retention jobs.",
                "Worked in a small agile team with trunk-based development.",
            ],
        },
    ]
}
