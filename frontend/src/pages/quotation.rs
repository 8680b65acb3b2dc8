use yew::prelude::*;
use crate::components::content::{ContentSection, PageHero};
use super::contact::CONTACT_EMAIL;

#[function_component(Quotation)]
pub fn quotation() -> Html {
    html! {
        <>
            <PageHero title="Request a quotation" subtitle="Fixed prices, agreed before we start." />
            <ContentSection heading="How it works">
                <ol class="steps">
                    <li>{"Send us a short description of your project and your deadline."}</li>
                    <li>{"We schedule a call to go through scope and constraints."}</li>
                    <li>{"You receive a written quotation with a task plan within five working days."}</li>
                </ol>
                <a class="btn btn-primary" href={format!("mailto:{}?subject=Quotation%20request", CONTACT_EMAIL)}>
                    {"Email us your project"}
                </a>
            </ContentSection>
        </>
    }
}
