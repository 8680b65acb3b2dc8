use yew::prelude::*;
use crate::components::content::{ContentSection, Feature, FeatureGrid, PageHero};

#[function_component(Showcases)]
pub fn showcases() -> Html {
    let cases = vec![
        Feature {
            title: "Retail chain relaunch",
            body: "Forty stores rebranded in twelve weeks with a single rollout calendar.",
        },
        Feature {
            title: "Museum digital archive",
            body: "Migration of 200,000 records, delivered two weeks ahead of schedule.",
        },
        Feature {
            title: "Agency website portfolio",
            body: "Eight client sites launched in one quarter by a shared delivery team.",
        },
    ];

    html! {
        <>
            <PageHero title="Showcases" subtitle="A selection of recent projects." />
            <ContentSection heading="Case studies">
                <FeatureGrid features={cases} />
            </ContentSection>
        </>
    }
}
