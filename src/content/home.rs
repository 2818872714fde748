//! Hero-section copy and call-to-action targets.

pub struct CtaButton {
    pub label: &'static str,
    /// Section id the button scrolls to.
    pub target: &'static str,
}

pub struct HomeContent {
    pub headline: &'static str,
    pub subtitle: &'static str,
    pub primary: CtaButton,
    pub secondary: CtaButton,
}

pub fn home() -> HomeContent {
    HomeContent {
        headline: "Building quiet, dependable software",
        subtitle: "Full stack developer with six years of experience shipping \
            web applications, developer tools, and the infrastructure underneath them.",
        primary: CtaButton {
            label: "View My Work",
            target: "projects",
        },
        secondary: CtaButton {
            label: "Get In Touch",
            target: "contact",
        },
    }
}
