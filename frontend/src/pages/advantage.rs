use yew::prelude::*;
use crate::components::content::{ContentSection, Feature, FeatureGrid, PageHero};

#[function_component(Advantage)]
pub fn advantage() -> Html {
    let advantages = vec![
        Feature {
            title: "Transparent planning",
            body: "Every task, owner and due date is visible from day one.",
        },
        Feature {
            title: "Fixed quotations",
            body: "Scope is agreed up front and priced before work starts.",
        },
        Feature {
            title: "European presence",
            body: "Teams and suppliers across the EU, invoicing in euro.",
        },
        Feature {
            title: "Proven delivery",
            body: "Years of projects closed on schedule, see our showcases.",
        },
    ];

    html! {
        <>
            <PageHero title="Our advantage" subtitle="Why clients keep coming back." />
            <ContentSection heading="What sets us apart">
                <FeatureGrid features={advantages} />
            </ContentSection>
        </>
    }
}
