//! Startup population of the view models.
//!
//! Pushes the static content, the seeded background, and the restored
//! settings into the window before the event loop starts. Sections register
//! themselves from markup geometry callbacks; nothing is registered here.

use crate::assets::ProjectGallery;
use crate::content::{self, Project};
use crate::settings::Settings;
use chrono::Datelike;
use slint::{ComponentHandle, ModelRc, VecModel};

pub fn populate(
    ui: &crate::AppWindow,
    projects: &[Project],
    galleries: &[ProjectGallery],
    settings: &Settings,
) {
    let view_state = ui.global::<crate::ViewState>();

    view_state.set_dark_theme(settings.theme.is_dark());
    view_state.set_reduced_motion(settings.reduced_motion);

    view_state.set_nav_entries(ModelRc::new(VecModel::from(vec![
        crate::NavEntry { id: "home".into(), label: "Home".into() },
        crate::NavEntry { id: "about".into(), label: "About".into() },
        crate::NavEntry { id: "projects".into(), label: "Projects".into() },
        crate::NavEntry { id: "contact".into(), label: "Contact".into() },
    ])));

    let profile = content::profile::profile();
    view_state.set_profile_name(profile.name.into());
    view_state.set_profile_title(profile.title.into());
    view_state.set_profile_location(profile.location.into());
    view_state.set_profile_summary(profile.summary.into());
    view_state.set_profile_education(profile.education.into());
    view_state.set_profile_languages(profile.languages.into());
    view_state.set_profile_recognition(profile.recognition.into());

    let home = content::home::home();
    view_state.set_home_headline(home.headline.into());
    view_state.set_home_subtitle(home.subtitle.into());
    view_state.set_cta_primary_label(home.primary.label.into());
    view_state.set_cta_primary_target(home.primary.target.into());
    view_state.set_cta_secondary_label(home.secondary.label.into());
    view_state.set_cta_secondary_target(home.secondary.target.into());

    let work_cards: Vec<crate::WorkCard> = content::work_history::work_history()
        .iter()
        .map(|entry| {
            let (preview, more_line) = content::bullet_preview(entry.bullets);
            crate::WorkCard {
                title: entry.title.into(),
                company: entry.company.into(),
                duration: entry.duration.into(),
                kind: entry.kind.label().into(),
                preview: preview.into(),
                more_line: more_line.into(),
            }
        })
        .collect();
    view_state.set_work_cards(ModelRc::new(VecModel::from(work_cards)));

    let (top, bottom) = content::skills::marquee_rows(content::skills::skills());
    view_state.set_skills_top(ModelRc::new(VecModel::from(skill_chips(&top))));
    view_state.set_skills_bottom(ModelRc::new(VecModel::from(skill_chips(&bottom))));

    let project_cards: Vec<crate::ProjectCard> = projects
        .iter()
        .zip(galleries)
        .map(|(project, gallery)| crate::ProjectCard {
            title: project.title.into(),
            description: project.description.into(),
            role: project.role.into(),
            tech_line: content::tech_line(project.tech).into(),
            feature_lines: content::feature_lines(project.features).into(),
            accent: slint::Color::from_rgb_u8(
                project.accent.0,
                project.accent.1,
                project.accent.2,
            ),
            capture_count: gallery.images.len() as i32,
            demo_url: project.demo_url.unwrap_or("").into(),
        })
        .collect();
    view_state.set_project_cards(ModelRc::new(VecModel::from(project_cards)));

    let contact = content::contact::contact();
    view_state.set_contact_email(contact.email.into());
    view_state.set_contact_location(contact.location.into());
    view_state.set_contact_github(contact.github.into());
    view_state.set_contact_linkedin(contact.linkedin.into());

    seed_background(&view_state);

    let year = chrono::Local::now().year();
    view_state.set_footer_line(format!("© {} {}. Built with Rust and Slint.", year, profile.name).into());
}

fn skill_chips(skills: &[content::Skill]) -> Vec<crate::SkillChip> {
    skills
        .iter()
        .map(|skill| crate::SkillChip {
            name: skill.name.into(),
            level: skill.level as i32,
        })
        .collect()
}

fn seed_background(view_state: &crate::ViewState<'_>) {
    let mut rng = rand::thread_rng();
    let (dots, glyphs) = crate::background::seed(&mut rng);

    let dots: Vec<crate::BackgroundDot> = dots
        .iter()
        .map(|dot| crate::BackgroundDot {
            x: dot.x,
            y: dot.y,
            size: dot.size,
            phase: dot.phase,
            duration: dot.duration,
        })
        .collect();
    view_state.set_background_dots(ModelRc::new(VecModel::from(dots)));

    let glyphs: Vec<crate::BackgroundGlyph> = glyphs
        .iter()
        .map(|glyph| crate::BackgroundGlyph {
            text: glyph.text.into(),
            x: glyph.x,
            y: glyph.y,
            phase: glyph.phase,
            duration: glyph.duration,
        })
        .collect();
    view_state.set_background_glyphs(ModelRc::new(VecModel::from(glyphs)));
}
