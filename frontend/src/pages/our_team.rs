use yew::prelude::*;
use crate::components::content::{ContentSection, PageHero};

struct TeamMember {
    name: &'static str,
    role: &'static str,
    picture: &'static str,
}

const TEAM: [TeamMember; 4] = [
    TeamMember { name: "Maria Keller", role: "Managing Director", picture: "/img/team/maria.jpg" },
    TeamMember { name: "Jonas Berg", role: "Head of Delivery", picture: "/img/team/jonas.jpg" },
    TeamMember { name: "Lea Moreau", role: "Design Lead", picture: "/img/team/lea.jpg" },
    TeamMember { name: "Tomás Ruiz", role: "Engineering Lead", picture: "/img/team/tomas.jpg" },
];

#[function_component(OurTeam)]
pub fn our_team() -> Html {
    html! {
        <>
            <PageHero title="Our team" subtitle="The people behind every plan." />
            <ContentSection heading="Meet the team">
                <div class="team-grid">
                    {for TEAM.iter().map(|member| html! {
                        <div class="team-card" key={member.name}>
                            <img src={member.picture} alt={member.name} class="team-photo" />
                            <h3>{member.name}</h3>
                            <p>{member.role}</p>
                        </div>
                    })}
                </div>
            </ContentSection>
        </>
    }
}
