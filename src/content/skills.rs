//! Skill list for the marquee rows.

pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0–100, drives the level bar on the chip.
    pub level: u8,
}

pub fn skills() -> Vec<Skill> {
    vec![
        Skill { name: "TypeScript", level: 92 },
        Skill { name: "React", level: 90 },
        Skill { name: "Vue.js", level: 82 },
        Skill { name: "Rust", level: 78 },
        Skill { name: "Python", level: 88 },
        Skill { name: "Node.js", level: 90 },
        Skill { name: "PostgreSQL", level: 86 },
        Skill { name: "MongoDB", level: 75 },
        Skill { name: "Redis", level: 72 },
        Skill { name: "AWS", level: 80 },
        Skill { name: "GCP", level: 68 },
        Skill { name: "Docker", level: 84 },
        Skill { name: "GitHub Actions", level: 76 },
        Skill { name: "GraphQL", level: 70 },
        Skill { name: "REST APIs", level: 90 },
        Skill { name: "HTML/CSS", level: 93 },
    ]
}

/// Splits the skill list into the two marquee rows; the top row scrolls left
/// to right and the bottom row the other way.
pub fn marquee_rows(skills: Vec<Skill>) -> (Vec<Skill>, Vec<Skill>) {
    let split = skills.len().div_ceil(2);
    let mut top = skills;
    let bottom = top.split_off(split);
    (top, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_split_evenly_with_odd_counts() {
        let skills = vec![
            Skill { name: "a", level: 1 },
            Skill { name: "b", level: 2 },
            Skill { name: "c", level: 3 },
        ];
        let (top, bottom) = marquee_rows(skills);
        assert_eq!(top.len(), 2);
        assert_eq!(bottom.len(), 1);
        assert_eq!(top[0].name, "a");
        assert_eq!(bottom[0].name, "c");
    }
}
