use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;

#[component]
pub fn Staff() -> impl IntoView {
    view! {
      <section class="mx-auto max-w-3xl px-6 pt-40">
        <h1 class="mb-6 text-4xl font-bold">"Staff"</h1>
        <p class="mb-8 text-lg text-slate-300">
          "The people who keep the lights on. Ping them on Discord before you DM in game."
        </p>
        <ul class="space-y-4 text-lg text-slate-300">
          <li><span class="font-bold text-white">"Arun"</span>" - Owner"</li>
          <li><span class="font-bold text-white">"Mirelle"</span>" - Admin, builds and events"</li>
          <li><span class="font-bold text-white">"Kipp"</span>" - Moderator, EU hours"</li>
          <li><span class="font-bold text-white">"Soren"</span>" - Moderator, NA hours"</li>
        </ul>
      </section>
    }
}
