use yew::prelude::*;
use crate::components::content::{ContentSection, PageHero};

struct EventListing {
    date: &'static str,
    title: &'static str,
    location: &'static str,
}

const UPCOMING: [EventListing; 3] = [
    EventListing { date: "March 14", title: "Planning for agencies", location: "Berlin" },
    EventListing { date: "April 22", title: "Retail project roundtable", location: "Amsterdam" },
    EventListing { date: "June 5", title: "Delivery leads meetup", location: "Lisbon" },
];

#[function_component(Events)]
pub fn events() -> Html {
    html! {
        <>
            <PageHero title="Events" subtitle="Meet us in person." />
            <ContentSection heading="Upcoming">
                <ul class="event-list">
                    {for UPCOMING.iter().map(|event| html! {
                        <li key={event.title}>
                            <span class="event-date">{event.date}</span>
                            <span class="event-name">{event.title}</span>
                            <span class="event-location">{event.location}</span>
                        </li>
                    })}
                </ul>
            </ContentSection>
        </>
    }
}
