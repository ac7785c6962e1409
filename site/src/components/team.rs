use super::{Card, CardContent};
use crate::content::{self, TeamMember};
use leptos::prelude::*;

/// "Our Team": one card per roster entry, in table order (captain first).
#[component]
pub fn TeamSection(
    /// Roster to render; defaults to the page content table
    #[prop(default = content::TEAM_MEMBERS)]
    members: &'static [TeamMember],
) -> impl IntoView {
    view! {
        <section id="team" class="section section-team">
            <div class="container">
                <h2 class="section-title">"Our Team"</h2>
                <div class="team-grid">
                    {members.iter().map(|member| view! {
                        <Card class="team-card">
                            <CardContent>
                                <h3 class="member-name">{member.name}</h3>
                                <p class="member-quote">{format!("“{}”", member.quote)}</p>
                            </CardContent>
                        </Card>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
