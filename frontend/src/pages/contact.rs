use yew::prelude::*;
use crate::components::content::{ContentSection, PageHero};

pub const CONTACT_EMAIL: &str = "hello@projecta.eu";

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <>
            <PageHero title="Contact" subtitle="We usually reply within one working day." />
            <ContentSection heading="Get in touch">
                <dl class="contact-details">
                    <dt>{"Email"}</dt>
                    <dd><a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a></dd>
                    <dt>{"Phone"}</dt>
                    <dd>{"+49 30 1234 5678"}</dd>
                    <dt>{"Office hours"}</dt>
                    <dd>{"Monday to Friday, 9:00 to 17:00 CET"}</dd>
                </dl>
            </ContentSection>
        </>
    }
}
