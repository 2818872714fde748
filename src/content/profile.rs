//! About-section profile data.

pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
    pub education: &'static str,
    pub languages: &'static str,
    pub recognition: &'static str,
}

pub fn profile() -> Profile {
    Profile {
        name: "Rin Asakura",
        title: "Full Stack Developer",
        location: "Osaka, Japan",
        summary: "Six years of experience building web applications end to end. \
            Currently freelancing with KAIRO Lab on AI-assisted developer tools, \
            with a focus on fast, reliable backends and interfaces that stay out \
            of the user's way. Comfortable across TypeScript, Python, Rust, and \
            cloud infrastructure.",
        education: "B.Eng. in Information Systems, Osaka Institute of Technology",
        languages: "Japanese (native), English (business)",
        recognition: "Winner of the 2021 Kansai Open Data Hackathon with team NIGHTCRANE.",
    }
}
