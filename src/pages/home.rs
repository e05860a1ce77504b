//! The portfolio page: hero, content sections, contact form.
//!
//! The page also owns the two intersection observers. One watches `.section`
//! elements and marks them revealed on first intersection; the other watches
//! `section[id]` with a header-sized inset and drives the active nav link.

use leptos::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::contact_form::ContactForm;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::section::Section;
use crate::state::ui::UiState;

/// Reveal animation: fire once a tenth of the section is visible, with the
/// bottom edge pulled in so sections animate before they are flush with it.
#[cfg(feature = "hydrate")]
const REVEAL_THRESHOLD: f64 = 0.1;
#[cfg(feature = "hydrate")]
const REVEAL_MARGIN: &str = "0px 0px -50px 0px";

/// Nav highlighting: a section counts as current once 30% intersects the
/// viewport inset by the fixed header height on both edges.
#[cfg(feature = "hydrate")]
const HIGHLIGHT_THRESHOLD: f64 = 0.3;
#[cfg(feature = "hydrate")]
const HIGHLIGHT_MARGIN: &str = "-80px 0px -80px 0px";

struct Skill {
    name: &'static str,
    level: &'static str,
}

const SKILLS: &[Skill] = &[
    Skill { name: "Rust", level: "Advanced" },
    Skill { name: "TypeScript", level: "Advanced" },
    Skill { name: "WebAssembly", level: "Advanced" },
    Skill { name: "PostgreSQL", level: "Proficient" },
    Skill { name: "Leptos", level: "Proficient" },
    Skill { name: "Axum", level: "Proficient" },
    Skill { name: "Docker", level: "Proficient" },
    Skill { name: "CSS", level: "Proficient" },
];

struct Project {
    name: &'static str,
    description: &'static str,
    stack: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        name: "Collaborative Whiteboard",
        description: "Real-time multi-user drawing board with presence \
                      indicators and an AI drawing assistant.",
        stack: "Rust \u{00B7} Axum \u{00B7} WebSockets \u{00B7} Leptos",
    },
    Project {
        name: "Terminal Dashboard",
        description: "Keyboard-driven TUI for monitoring deployments and logs \
                      across environments.",
        stack: "Rust \u{00B7} ratatui \u{00B7} SQLite",
    },
    Project {
        name: "Schema Designer",
        description: "Visual database schema editor with live SQL export and \
                      migration diffing.",
        stack: "TypeScript \u{00B7} React \u{00B7} PostgreSQL",
    },
];

/// The single page of the site.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Wire both observers once the section tree is in the DOM.
    Effect::new(move || {
        observe_sections(ui);
    });

    let skills = SKILLS
        .iter()
        .map(|skill| {
            view! {
                <li class="skills__item">
                    <span class="skills__name">{skill.name}</span>
                    <span class="skills__level">{skill.level}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let projects = PROJECTS
        .iter()
        .map(|project| {
            view! {
                <article class="project-card">
                    <h3 class="project-card__name">{project.name}</h3>
                    <p class="project-card__description">{project.description}</p>
                    <p class="project-card__stack">{project.stack}</p>
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Navbar/>

        <main>
            <Hero/>

            <Section id="about" title="About Me">
                <p class="section__lead">
                    "I'm a full-stack developer who cares about the whole path a \
                     request takes, from the schema to the pixels. Lately that \
                     means shipping Rust on both sides of the wire."
                </p>
                <p>
                    "Away from the keyboard I climb, make questionable espresso, \
                     and read more RFCs than is strictly healthy."
                </p>
            </Section>

            <Section id="skills" title="Skills">
                <ul class="skills">{skills}</ul>
            </Section>

            <Section id="projects" title="Projects">
                <div class="projects">{projects}</div>
            </Section>

            <Section id="contact" title="Get In Touch">
                <p class="section__lead">
                    "Have a project in mind? Send a message and I'll get back to \
                     you within a couple of days."
                </p>
                <ContactForm/>
            </Section>
        </main>

        <footer class="footer">
            <p class="footer__note">"\u{00A9} 2026 Alex Chen"</p>
        </footer>

        <BackToTop/>
    }
}

/// Set up the reveal and highlight observers over the rendered sections.
/// Without `IntersectionObserver` support this exits quietly and sections
/// keep their default presentation.
fn observe_sections(ui: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::observe;

        if !observe::supported() {
            return;
        }

        let reveal_targets = observe::query_elements(".section");
        observe::observe_ids(&reveal_targets, REVEAL_THRESHOLD, REVEAL_MARGIN, move |batch| {
            ui.update(|u| {
                for (id, intersecting) in &batch {
                    if *intersecting {
                        u.mark_revealed(id);
                    }
                }
            });
        });

        // Entries fold in delivery order: with several sections intersecting
        // at once, the last one processed claims the highlight.
        let highlight_targets = observe::query_elements("section[id]");
        observe::observe_ids(
            &highlight_targets,
            HIGHLIGHT_THRESHOLD,
            HIGHLIGHT_MARGIN,
            move |batch| {
                ui.update(|u| u.set_active_from_entries(&batch));
            },
        );
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ui;
    }
}
