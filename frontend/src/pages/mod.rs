//! One component per route. Apart from the admin calendar these are
//! static content pages.

mod about;
mod admin_calendar;
mod advantage;
mod challenges;
mod contact;
mod eu_store;
mod events;
mod landing;
mod mission;
mod not_found;
mod our_team;
mod project_management;
mod quotation;
mod showcases;
mod webinars;

pub use about::About;
pub use admin_calendar::AdminCalendar;
pub use advantage::Advantage;
pub use challenges::Challenges;
pub use contact::Contact;
pub use eu_store::EuStore;
pub use events::Events;
pub use landing::LandingPage;
pub use mission::Mission;
pub use not_found::NotFound;
pub use our_team::OurTeam;
pub use project_management::ProjectManagement;
pub use quotation::Quotation;
pub use showcases::Showcases;
pub use webinars::Webinars;
