use yew::prelude::*;
use crate::components::content::{ContentSection, Feature, FeatureGrid, PageHero};

#[function_component(Webinars)]
pub fn webinars() -> Html {
    let sessions = vec![
        Feature {
            title: "Planning a project in one afternoon",
            body: "A walkthrough of our kickoff template. 45 minutes.",
        },
        Feature {
            title: "Running a weekly check-in",
            body: "What to cover, what to write down and what to skip. 30 minutes.",
        },
    ];

    html! {
        <>
            <PageHero title="Webinars" subtitle="Free online sessions, recorded for later viewing." />
            <ContentSection heading="Sessions">
                <FeatureGrid features={sessions} />
            </ContentSection>
        </>
    }
}
