use leptos::IntoView;
use leptos::component;
use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::view;

#[component]
pub fn Vote() -> impl IntoView {
    view! {
      <section class="mx-auto max-w-3xl px-6 pt-40">
        <h1 class="mb-6 text-4xl font-bold">"Vote"</h1>
        <p class="mb-8 text-lg text-slate-300">
          "Daily votes bump the server in the listings and drop a crate key in your inventory."
        </p>
        <ul class="list-disc space-y-3 pl-6 text-lg">
          <li>
            <a
              href="https://minecraft-server-list.com/"
              target="_blank"
              rel="noopener noreferrer"
              class="underline hover:text-[lightblue]"
            >"minecraft-server-list.com"</a>
          </li>
          <li>
            <a
              href="https://minecraftservers.org/"
              target="_blank"
              rel="noopener noreferrer"
              class="underline hover:text-[lightblue]"
            >"minecraftservers.org"</a>
          </li>
          <li>
            <a
              href="https://topg.org/minecraft-servers/"
              target="_blank"
              rel="noopener noreferrer"
              class="underline hover:text-[lightblue]"
            >"topg.org"</a>
          </li>
        </ul>
      </section>
    }
}
