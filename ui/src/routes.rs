// ui/src/routes.rs
use leptos::IntoView;
use leptos::component;
use leptos::view;
use leptos_router::components::Route;
use leptos_router::components::Routes;
use leptos_router::path;

use crate::pages::{Home, NotFound, Rules, Staff, Vote};

#[component]
pub fn RoutesMenu() -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <NotFound/> }>
        <Route path=path!("")          view=Home   />
        <Route path=path!("/rules")    view=Rules  />
        <Route path=path!("/staff")    view=Staff  />
        <Route path=path!("/vote")     view=Vote   />
      </Routes>
    }
}
