use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::content::PageHero;
use crate::routes::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <>
            <PageHero title="Page not found" subtitle="The page you are looking for does not exist." />
            <div class="container">
                <Link<Route> to={Route::Home} classes={classes!("btn", "btn-primary")}>{"Back to the home page"}</Link<Route>>
            </div>
        </>
    }
}
