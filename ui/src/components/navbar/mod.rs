use gloo_timers::callback::Timeout;
use leptos::IntoView;
use leptos::component;
use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::Effect;
use leptos::prelude::ElementChild;
use leptos::prelude::For;
use leptos::prelude::Get;
use leptos::prelude::GetUntracked;
use leptos::prelude::Memo;
use leptos::prelude::OnAttribute;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::prelude::Update;
use leptos::view;
use leptos_router::hooks::use_location;

pub mod icons;
pub mod items;
pub mod viewport;

use self::icons::NavIcon;
use self::items::{DISCORD_URL, NAV_ITEMS, NavItem, decoration_classes};
use self::viewport::use_is_mobile;

/// How long the panel's slide runs; the exit side keeps the panel mounted
/// for exactly this long.
const SLIDE_MS: u32 = 300;

/// Fixed top navigation: full link row plus Discord button on desktop, a
/// toggle and slide-out panel under the mobile breakpoint. Mounted once by
/// the app shell, takes no props.
#[component]
pub fn Navbar() -> impl IntoView {
    let is_mobile = use_is_mobile();
    let pathname = use_location().pathname;

    let menu_open = RwSignal::new(false);
    // the panel outlives `menu_open` by one exit slide
    let panel_mounted = RwSignal::new(false);
    let close_epoch = RwSignal::new(0u32);

    Effect::new(move |_| {
        if menu_open.get() {
            panel_mounted.set(true);
        } else if panel_mounted.get_untracked() {
            let epoch = close_epoch.get_untracked() + 1;
            close_epoch.set(epoch);
            Timeout::new(SLIDE_MS, move || {
                // a reopen during the slide supersedes this timeout
                if close_epoch.get_untracked() == epoch && !menu_open.get_untracked() {
                    panel_mounted.set(false);
                }
            })
            .forget();
        }
    });

    view! {
        <nav class="fixed top-0 left-0 right-0 z-[1000] flex h-[60px] items-center bg-transparent px-5 py-2.5">
            <div class="z-[1001] flex items-center">
                <img src="/assets/svg/logo.svg" alt="Logo" class="h-[120px]"/>
            </div>

            {move || (!is_mobile.get()).then(|| view! {
                <div class="absolute left-1/2 flex -translate-x-1/2 items-center gap-5">
                    <For
                        each=move || NAV_ITEMS
                        key=|item| item.label
                        children=move |item| desktop_link(item, pathname)
                    />
                </div>

                <div class="ml-auto">
                    <div class="rounded transition duration-300 hover:scale-110 hover:bg-white/10">
                        <a
                            href=DISCORD_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-1.5 rounded bg-[#5865F2] px-3 py-2 font-bold text-white no-underline"
                        >
                            {NavIcon::Discord.view()} " Discord"
                        </a>
                    </div>
                </div>
            })}

            {move || is_mobile.get().then(|| view! {
                <button
                    class="z-[1001] ml-auto cursor-pointer border-none bg-transparent text-2xl text-white"
                    aria-label="Open menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {NavIcon::Menu.view()}
                </button>
            })}

            {move || (is_mobile.get() && panel_mounted.get()).then(|| view! {
                <div class=move || format!(
                    "fixed top-0 z-[9999] flex h-screen w-[70%] flex-col bg-black/85 pt-[60px] {}",
                    if menu_open.get() { "navbar-panel-enter" } else { "navbar-panel-exit" },
                )>
                    <button
                        class="absolute top-[15px] right-5 cursor-pointer border-none bg-transparent text-3xl text-white"
                        aria-label="Close menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {NavIcon::Close.view()}
                    </button>

                    <For
                        each=move || NAV_ITEMS
                        key=|item| item.label
                        children=move |item| panel_link(item, pathname, menu_open)
                    />

                    <div
                        class="transition duration-300 hover:scale-110 hover:bg-white/10"
                        on:click=move |_| menu_open.set(false)
                    >
                        <a
                            href=DISCORD_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-2 border-b border-[#444] bg-[#5865F2] px-5 py-[15px] text-lg font-bold text-white no-underline"
                        >
                            {NavIcon::Discord.view()} " Discord"
                        </a>
                    </div>
                </div>
            })}
        </nav>
    }
}

fn desktop_link(item: NavItem, pathname: Memo<String>) -> impl IntoView {
    view! {
        <div class="rounded transition duration-300 hover:scale-110 hover:bg-white/10">
            <a
                href=item.to
                class=move || format!(
                    "flex items-center gap-1.5 rounded px-3 py-2 text-base font-bold {}",
                    decoration_classes(item.is_active(&pathname.get())),
                )
            >
                {item.icon.view()} " " {item.label}
                {item.badge.map(|badge| view! {
                    <sup class="ml-1 text-[10px] text-[#ffcc00]">{badge}</sup>
                })}
            </a>
        </div>
    }
}

/// Panel rows close the menu on selection; navigation still goes through
/// the anchor underneath.
fn panel_link(item: NavItem, pathname: Memo<String>, menu_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <div
            class="transition duration-300 hover:scale-110 hover:bg-white/10"
            on:click=move |_| menu_open.set(false)
        >
            <a
                href=item.to
                class=move || format!(
                    "flex items-center gap-2 border-b border-[#444] px-5 py-[15px] text-lg font-bold {}",
                    decoration_classes(item.is_active(&pathname.get())),
                )
            >
                {item.icon.view()} " " {item.label}
                {item.badge.map(|badge| view! {
                    <sup class="ml-1 text-[10px] text-[#ffcc00]">{badge}</sup>
                })}
            </a>
        </div>
    }
}
