use yew::prelude::*;
use yew_router::prelude::*;
use crate::routes::{Route, NAV_ITEMS};

pub const SITE_NAME: &str = "Projecta";

#[function_component(Header)]
pub fn header() -> Html {
    let current = use_route::<Route>();

    html! {
        <header class="header">
            <div class="container">
                <Link<Route> to={Route::Home} classes={classes!("brand")}>{SITE_NAME}</Link<Route>>
                <nav class="site-nav">
                    {for NAV_ITEMS.iter().map(|(route, label)| {
                        let classes = classes!("nav-link", (current == Some(*route)).then_some("active"));
                        html! {
                            <Link<Route> to={*route} {classes}>{*label}</Link<Route>>
                        }
                    })}
                </nav>
            </div>
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container">
                <span>{format!("© {}", SITE_NAME)}</span>
                <Link<Route> to={Route::Contact} classes={classes!("footer-link")}>{"Contact"}</Link<Route>>
                <Link<Route> to={Route::EuStore} classes={classes!("footer-link")}>{"EU Store"}</Link<Route>>
                <Link<Route> to={Route::AdminCalendar} classes={classes!("footer-link")}>{"Admin"}</Link<Route>>
            </div>
        </footer>
    }
}
