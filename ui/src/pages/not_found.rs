use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <section class="mx-auto max-w-3xl px-6 pt-40 text-center">
        <h1 class="mb-4 text-5xl font-bold">"404"</h1>
        <p class="mb-8 text-lg text-slate-300">
          "Nothing here yet. The path you followed leads nowhere."
        </p>
        <a href="/" class="rounded-full bg-[#5865F2] px-6 py-3 font-bold text-white no-underline">
          "Back home"
        </a>
      </section>
    }
}
