use yew::prelude::*;
use crate::components::content::{ContentSection, Feature, FeatureGrid, PageHero};

#[function_component(EuStore)]
pub fn eu_store() -> Html {
    let packages = vec![
        Feature {
            title: "Starter",
            body: "Project kickoff, plan and calendar setup for a single team.",
        },
        Feature {
            title: "Team",
            body: "Ongoing project management for up to three parallel projects.",
        },
        Feature {
            title: "Enterprise",
            body: "Dedicated delivery lead, custom reporting and on-site workshops.",
        },
    ];

    html! {
        <>
            <PageHero title="EU Store" subtitle="Packages for customers inside the European Union." />
            <ContentSection heading="Packages">
                <FeatureGrid features={packages} />
                <p class="note">{"All prices exclude VAT. Invoices are issued in euro."}</p>
            </ContentSection>
        </>
    }
}
