use yew::prelude::*;
use crate::components::content::{ContentSection, Feature, FeatureGrid, PageHero};

#[function_component(Challenges)]
pub fn challenges() -> Html {
    let challenges = vec![
        Feature {
            title: "Unclear ownership",
            body: "Every task gets exactly one owner, shown on the calendar.",
        },
        Feature {
            title: "Slipping deadlines",
            body: "Due dates are tracked daily and risks raised in the weekly check-in.",
        },
        Feature {
            title: "Scope creep",
            body: "Changes go through a short written change request before work starts.",
        },
    ];

    html! {
        <>
            <PageHero title="Challenges we solve" />
            <ContentSection heading="Common problems">
                <FeatureGrid features={challenges} />
            </ContentSection>
        </>
    }
}
