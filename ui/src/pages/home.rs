use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;

#[component]
pub fn Home() -> impl IntoView {
    view! {
      <section class="mx-auto max-w-3xl px-6 pt-40 text-center">
        <h1 class="mb-4 text-5xl font-bold">"Welcome to Visantara"</h1>
        <p class="mb-8 text-lg text-slate-300">
          "A survival world with a long memory. Claim a plot and say hi in chat."
        </p>
        <p class="font-mono text-xl text-[#ffcc00]">"play.visantara.com"</p>
      </section>
    }
}
