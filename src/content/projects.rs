//! Project cards and their capture directories.

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    /// Card accent color as RGB.
    pub accent: (u8, u8, u8),
    pub features: &'static [&'static str],
    pub role: &'static str,
    pub demo_url: Option<&'static str>,
    /// Directory under `assets/projects/` scanned at startup for the gallery.
    pub image_dir: &'static str,
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Atlas Answers",
            description: "Retrieval-augmented knowledge assistant with cited answers, \
                vector search, and query history.",
            tech: &["React", "Node.js", "PostgreSQL", "pgvector", "Docker"],
            accent: (59, 130, 246),
            features: &[
                "Generated answers with source citations",
                "Hybrid keyword and vector search",
                "Per-team query history",
                "Single-command deployment",
            ],
            role: "Full Stack Developer",
            demo_url: None,
            image_dir: "atlas-answers",
        },
        Project {
            title: "Ensemble Studio",
            description: "Workbench for building and comparing AI assistants across \
                model providers, with side-by-side conversations.",
            tech: &["React", "TypeScript", "FastAPI", "Supabase"],
            accent: (139, 92, 246),
            features: &[
                "Custom assistant presets",
                "Model comparison view",
                "Streaming chat",
                "Usage dashboard",
            ],
            role: "Frontend Developer",
            demo_url: None,
            image_dir: "ensemble-studio",
        },
        Project {
            title: "Shiosai Books",
            description: "Book discovery platform with fast faceted search and a \
                catalogue of independent Kansai publishers.",
            tech: &["Vue.js", "FastAPI", "PostgreSQL", "Tailwind CSS"],
            accent: (20, 184, 166),
            features: &[
                "Category browsing",
                "Instant search",
                "Genre filtering",
                "Mobile-first layout",
            ],
            role: "Full Stack Developer",
            demo_url: Some("https://books.shiosai.example.com/"),
            image_dir: "shiosai-books",
        },
        Project {
            title: "Tsumugi HR",
            description: "Human resource portal with attendance tracking, leave \
                workflows, and monthly reporting for small organizations.",
            tech: &["Angular", "Flutter", "Python", "DynamoDB"],
            accent: (16, 185, 129),
            features: &[
                "Check-in and check-out tracking",
                "Leave request and approval workflow",
                "Member management",
                "Monthly reporting",
                "Admin analytics dashboard",
            ],
            role: "Full Stack Developer",
            demo_url: Some("https://tsumugi-hr.example.com/"),
            image_dir: "tsumugi-hr",
        },
        Project {
            title: "Kouza",
            description: "Online learning platform pairing a learner interface with \
                an instructor studio for course creation and progress tracking.",
            tech: &["Angular", "Python", "DynamoDB", "Stripe"],
            accent: (249, 115, 22),
            features: &[
                "Course enrolment and payments",
                "Interactive assignments",
                "Automated quizzes",
                "Discussion forums",
                "Instructor studio dashboard",
            ],
            role: "Full Stack Developer",
            demo_url: Some("https://kouza.example.com/"),
            image_dir: "kouza",
        },
    ]
}
