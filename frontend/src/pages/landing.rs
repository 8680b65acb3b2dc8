use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::content::{ContentSection, Feature, FeatureGrid, PageHero};
use crate::routes::Route;

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let highlights = vec![
        Feature {
            title: "Plan",
            body: "Break projects into tasks with owners, start dates and due dates.",
        },
        Feature {
            title: "Schedule",
            body: "See every task on a shared month, week or day calendar.",
        },
        Feature {
            title: "Deliver",
            body: "Keep clients informed with clear timelines and regular check-ins.",
        },
    ];

    html! {
        <>
            <PageHero
                title="Projects delivered on time, across Europe"
                subtitle="Project management and delivery for growing teams."
            />
            <ContentSection heading="What we do">
                <FeatureGrid features={highlights} />
                <div class="cta-row">
                    <Link<Route> to={Route::Quotation} classes={classes!("btn", "btn-primary")}>{"Request a quotation"}</Link<Route>>
                    <Link<Route> to={Route::Showcases} classes={classes!("btn", "btn-secondary")}>{"See our work"}</Link<Route>>
                </div>
            </ContentSection>
        </>
    }
}
