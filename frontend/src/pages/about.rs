use yew::prelude::*;
use crate::components::content::{ContentSection, PageHero};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <>
            <PageHero title="About us" subtitle="A small team with a simple promise: projects that land." />
            <ContentSection heading="Who we are">
                <p>
                    {"We are project managers, designers and engineers who have shipped work for \
                      agencies, retailers and public institutions. We run every engagement from a \
                      single shared plan so clients always know what is happening and when."}
                </p>
            </ContentSection>
            <ContentSection heading="How we work">
                <ul class="plain-list">
                    <li>{"One accountable lead per project"}</li>
                    <li>{"Weekly check-ins with a written summary"}</li>
                    <li>{"A shared calendar of every task and deadline"}</li>
                </ul>
            </ContentSection>
        </>
    }
}
