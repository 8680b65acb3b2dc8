use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    About, AdminCalendar, Advantage, Challenges, Contact, EuStore, Events, LandingPage, Mission,
    NotFound, OurTeam, ProjectManagement, Quotation, Showcases, Webinars,
};

/// Flat route table, one page per path
#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/advantage")]
    Advantage,
    #[at("/contact")]
    Contact,
    #[at("/our-team")]
    OurTeam,
    #[at("/eu-store")]
    EuStore,
    #[at("/mission")]
    Mission,
    #[at("/events")]
    Events,
    #[at("/quotation")]
    Quotation,
    #[at("/showcases")]
    Showcases,
    #[at("/challenges")]
    Challenges,
    #[at("/project")]
    Project,
    #[at("/webinar")]
    Webinar,
    #[at("/admin/calendar")]
    AdminCalendar,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Links shown in the site navigation, in display order
pub const NAV_ITEMS: [(Route, &str); 12] = [
    (Route::About, "About"),
    (Route::Advantage, "Advantage"),
    (Route::Mission, "Mission"),
    (Route::OurTeam, "Our Team"),
    (Route::Project, "Project Management"),
    (Route::Showcases, "Showcases"),
    (Route::Challenges, "Challenges"),
    (Route::Events, "Events"),
    (Route::Webinar, "Webinars"),
    (Route::EuStore, "EU Store"),
    (Route::Quotation, "Quotation"),
    (Route::Contact, "Contact"),
];

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <LandingPage /> },
        Route::About => html! { <About /> },
        Route::Advantage => html! { <Advantage /> },
        Route::Contact => html! { <Contact /> },
        Route::OurTeam => html! { <OurTeam /> },
        Route::EuStore => html! { <EuStore /> },
        Route::Mission => html! { <Mission /> },
        Route::Events => html! { <Events /> },
        Route::Quotation => html! { <Quotation /> },
        Route::Showcases => html! { <Showcases /> },
        Route::Challenges => html! { <Challenges /> },
        Route::Project => html! { <ProjectManagement /> },
        Route::Webinar => html! { <Webinars /> },
        Route::AdminCalendar => html! { <AdminCalendar /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(path: &str) -> Route {
        Route::recognize(path)
            .or_else(Route::not_found_route)
            .expect("route table has a not-found route")
    }

    #[test]
    fn test_public_paths() {
        let table = [
            ("/", Route::Home),
            ("/about", Route::About),
            ("/advantage", Route::Advantage),
            ("/contact", Route::Contact),
            ("/our-team", Route::OurTeam),
            ("/eu-store", Route::EuStore),
            ("/mission", Route::Mission),
            ("/events", Route::Events),
            ("/quotation", Route::Quotation),
            ("/showcases", Route::Showcases),
            ("/challenges", Route::Challenges),
            ("/project", Route::Project),
            ("/webinar", Route::Webinar),
        ];

        for (path, route) in table {
            assert_eq!(resolve(path), route, "path {}", path);
            assert_eq!(route.to_path(), path);
        }
    }

    #[test]
    fn test_admin_calendar_path() {
        assert_eq!(resolve("/admin/calendar"), Route::AdminCalendar);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(resolve("/pricing"), Route::NotFound);
        assert_eq!(resolve("/about/team"), Route::NotFound);
        assert_eq!(resolve("/admin"), Route::NotFound);
    }

    #[test]
    fn test_nav_items_are_routable() {
        for (route, label) in NAV_ITEMS {
            assert!(!label.is_empty());
            assert_eq!(resolve(&route.to_path()), route);
        }
    }
}
