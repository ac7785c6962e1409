use super::{Card, CardContent, Icon, ICON_BARBELL};
use crate::content::{self, ProjectHighlight};
use leptos::prelude::*;

/// "What We Do": one card per project highlight, in table order.
#[component]
pub fn ProjectsSection(
    /// Highlights to render; defaults to the page content table
    #[prop(default = content::PROJECT_HIGHLIGHTS)]
    projects: &'static [ProjectHighlight],
) -> impl IntoView {
    view! {
        <section id="projects" class="section section-projects">
            <div class="container">
                <h2 class="section-title">"What We Do"</h2>
                <p class="section-description">
                    "We create memorable brand experiences and campaigns that move people and "
                    "businesses forward."
                </p>
                <div class="projects-grid">
                    {projects.iter().map(|project| view! {
                        <Card class="project-card">
                            <CardContent>
                                <div class="project-icon-ring">
                                    <Icon path=ICON_BARBELL size="48" class="project-icon" />
                                </div>
                                <h3 class="project-title">{project.title}</h3>
                                <p class="project-description">{project.description}</p>
                            </CardContent>
                        </Card>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
