//! Static page content, one module per section.

pub mod contact;
pub mod home;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod work_history;

pub use contact::ContactInfo;
pub use home::HomeContent;
pub use profile::Profile;
pub use projects::Project;
pub use skills::Skill;
pub use work_history::{WorkExperience, WorkKind};

/// First two bullets of a description plus a "+N more" line for the rest.
/// Work experience cards stay compact this way; the full list never renders.
pub fn bullet_preview(bullets: &[&str]) -> (String, String) {
    let preview = bullets
        .iter()
        .take(2)
        .map(|b| format!("• {}", b))
        .collect::<Vec<_>>()
        .join("\n");

    let more = match bullets.len().saturating_sub(2) {
        0 => String::new(),
        n => format!("+{} more", n),
    };

    (preview, more)
}

/// Joins a tech list into the single line shown on a project card.
pub fn tech_line(tech: &[&str]) -> String {
    tech.join(" · ")
}

/// Feature bullets joined for the card body.
pub fn feature_lines(features: &[&str]) -> String {
    features
        .iter()
        .map(|f| format!("• {}", f))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_preview_truncates_to_two() {
        let (preview, more) = bullet_preview(&["one", "two", "three", "four"]);
        assert_eq!(preview, "• one\n• two");
        assert_eq!(more, "+2 more");
    }

    #[test]
    fn bullet_preview_short_list_has_no_more_line() {
        let (preview, more) = bullet_preview(&["only"]);
        assert_eq!(preview, "• only");
        assert_eq!(more, "");
    }

    #[test]
    fn bullet_preview_exactly_two() {
        let (_, more) = bullet_preview(&["a", "b"]);
        assert_eq!(more, "");
    }

    #[test]
    fn tech_line_joins() {
        assert_eq!(tech_line(&["Rust", "Slint", "SQLite"]), "Rust · Slint · SQLite");
    }
}
