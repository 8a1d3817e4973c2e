use leptos::*;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos_router::components::Router;

use leptos_meta::Stylesheet;
use leptos_meta::Title;
use leptos_meta::provide_meta_context;

use crate::components::Navbar;
use crate::routes::RoutesMenu;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Router>
        <Stylesheet href="/assets/css/site.css"/>
        <Title text="Visantara"/>

        <Navbar/>

        <main class="min-h-screen pt-[60px]">
          <RoutesMenu/>
        </main>
      </Router>
    }
}
