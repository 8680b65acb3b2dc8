use yew::prelude::*;
use crate::components::content::{ContentSection, PageHero};

#[function_component(Mission)]
pub fn mission() -> Html {
    html! {
        <>
            <PageHero title="Our mission" />
            <ContentSection heading="Make project delivery predictable">
                <p>
                    {"Projects fail quietly: a missed dependency here, an unclear owner there. \
                      Our mission is to make every commitment visible, so problems surface while \
                      they are still cheap to fix."}
                </p>
            </ContentSection>
        </>
    }
}
