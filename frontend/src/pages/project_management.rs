use yew::prelude::*;
use crate::components::content::{ContentSection, PageHero};

#[function_component(ProjectManagement)]
pub fn project_management() -> Html {
    html! {
        <>
            <PageHero title="Project management" subtitle="From kickoff to handover." />
            <ContentSection heading="Phases">
                <ol class="steps">
                    <li><strong>{"Kickoff: "}</strong>{"goals, stakeholders and constraints."}</li>
                    <li><strong>{"Planning: "}</strong>{"tasks, owners and dates on a shared calendar."}</li>
                    <li><strong>{"Delivery: "}</strong>{"weekly check-ins and a running status report."}</li>
                    <li><strong>{"Handover: "}</strong>{"documentation, training and a closing review."}</li>
                </ol>
            </ContentSection>
        </>
    }
}
