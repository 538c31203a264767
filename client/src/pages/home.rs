//! Single-page portfolio: hero, about, skills, projects, datasets, contact.

use leptos::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::contact_form::ContactForm;
use crate::components::cv_download::CvDownload;
use crate::components::datasets::DatasetsSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::reveal::Reveal;
use crate::components::skill_bar::SkillBar;
use crate::site::{PROJECTS, SKILLS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <NavBar/>
        <main>
            <Hero/>

            <section id="about" class="section">
                <h2 class="section-title">"About"</h2>
                <Reveal class="glass-card">
                    <p>
                        "I turn raw data into decisions: cleaning, modelling, and reporting, "
                        "with the occasional tool built along the way."
                    </p>
                    <CvDownload/>
                </Reveal>
            </section>

            <section id="skills" class="section">
                <h2 class="section-title">"Skills"</h2>
                <Reveal class="glass-card">
                    {SKILLS
                        .iter()
                        .map(|skill| view! { <SkillBar name=skill.name percent=skill.percent/> })
                        .collect_view()}
                </Reveal>
            </section>

            <section id="projects" class="section">
                <h2 class="section-title">"Projects"</h2>
                <div class="projects-grid">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <Reveal class="project-card">
                                    <h3>{project.title}</h3>
                                    <p>{project.summary}</p>
                                    <a href=project.href target="_blank" rel="noopener">"View"</a>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <DatasetsSection/>

            <section id="contact" class="section">
                <h2 class="section-title">"Contact"</h2>
                <Reveal class="glass-card">
                    <ContactForm/>
                </Reveal>
            </section>
        </main>
        <Footer/>
        <BackToTop/>
    }
}
