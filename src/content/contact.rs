//! Contact-section data.

pub struct ContactInfo {
    pub email: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub fn contact() -> ContactInfo {
    ContactInfo {
        email: "rin.asakura.dev@example.com",
        location: "Osaka, Japan",
        github: "https://github.com/rinasakura",
        linkedin: "https://linkedin.com/in/rinasakura",
    }
}
