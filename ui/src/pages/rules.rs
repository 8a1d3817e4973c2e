use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;

#[component]
pub fn Rules() -> impl IntoView {
    view! {
      <section class="mx-auto max-w-3xl px-6 pt-40">
        <h1 class="mb-6 text-4xl font-bold">"Server Rules"</h1>
        <ol class="list-decimal space-y-3 pl-6 text-lg text-slate-300">
          <li>"Be decent. Banter is fine, harassment is not."</li>
          <li>"No griefing or stealing, claimed land or not."</li>
          <li>"No hacked clients, x-ray packs, or dupe exploits."</li>
          <li>"Keep redstone clocks off before you log out."</li>
          <li>"Staff rulings are final. Appeal on Discord, not in chat."</li>
        </ol>
      </section>
    }
}
