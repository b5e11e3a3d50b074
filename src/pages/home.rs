//! Single-page portfolio layout.

use leptos::prelude::*;

use crate::components::cert_gallery::CertificateGallery;
use crate::components::contact_form::ContactForm;
use crate::components::navbar::{Navbar, ScrollTop};
use crate::components::reveal::Reveal;
use crate::components::section::Section;

struct SkillGroup {
    title: &'static str,
    icon: &'static str,
    items: &'static [&'static str],
}

static SKILL_GROUPS: [SkillGroup; 3] = [
    SkillGroup { title: "Languages", icon: "fas fa-code", items: &["Python", "Java", "C", "JavaScript"] },
    SkillGroup { title: "Web", icon: "fas fa-globe", items: &["HTML", "CSS", "Flutter"] },
    SkillGroup {
        title: "Data & ML",
        icon: "fas fa-brain",
        items: &["Pandas", "NumPy", "scikit-learn", "Machine Learning"],
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    let skills = SKILL_GROUPS
        .iter()
        .map(|group| {
            view! {
                <Reveal class="skills-category glass">
                    <h3>
                        <i class=group.icon></i>
                        " "
                        {group.title}
                    </h3>
                    <ul class="skill-list">
                        {group.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <Navbar/>
        <main>
            <Section id="home" class="hero">
                <Reveal class="hero-content">
                    <p class="hero-greeting">"Hello, I'm"</p>
                    <h1 class="hero-title">"Adarsh A"</h1>
                    <p class="hero-subtitle">"Electronics & Communication student, developer, and lifelong learner."</p>
                    <div class="hero-actions">
                        <a href="#contact" class="btn btn-primary">"Get in Touch"</a>
                        <a href="#certifications" class="btn btn-secondary">"View Certificates"</a>
                    </div>
                </Reveal>
            </Section>

            <Section id="about">
                <h2 class="section-title">"About Me"</h2>
                <Reveal class="glass about-card">
                    <p>
                        "I enjoy building things that sit between hardware and software, from embedded "
                        "projects to data science notebooks and web apps."
                    </p>
                </Reveal>
            </Section>

            <Section id="skills">
                <h2 class="section-title">"Skills"</h2>
                <div class="skills-grid">{skills}</div>
            </Section>

            <Section id="certifications">
                <h2 class="section-title">"Certifications & Training"</h2>
                <CertificateGallery/>
            </Section>

            <Section id="contact">
                <h2 class="section-title">"Contact"</h2>
                <Reveal>
                    <ContactForm/>
                </Reveal>
            </Section>
        </main>
        <footer class="footer">
            <p>"© Adarsh A"</p>
        </footer>
        <ScrollTop/>
    }
}
