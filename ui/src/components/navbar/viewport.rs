use leptos::ev::resize;
use leptos::prelude::Get;
use leptos::prelude::RwSignal;
use leptos::prelude::Set;
use leptos::prelude::Signal;
use leptos_use::use_event_listener;
use leptos_use::use_window;

/// Widths below this get the compact layout; 768 itself is still desktop.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}

/// Current `window.innerWidth`, if there is a window at all.
fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Reactive compact-layout flag: read once up front, refreshed on every
/// window resize, last event wins. Without a window (non-interactive
/// render) the bar stays in desktop layout. The listener is bound to the
/// calling scope and removed when that scope is disposed.
pub fn use_is_mobile() -> Signal<bool> {
    let width = RwSignal::new(viewport_width().unwrap_or(f64::INFINITY));

    let _ = use_event_listener(use_window(), resize, move |_| {
        if let Some(w) = viewport_width() {
            width.set(w);
        }
    });

    Signal::derive(move || is_mobile_width(width.get()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_width_is_desktop() {
        assert!(!is_mobile_width(768.0));
        assert!(is_mobile_width(767.0));
        assert!(is_mobile_width(767.9));
    }

    #[test]
    fn narrow_widths_are_mobile() {
        assert!(is_mobile_width(500.0));
        assert!(is_mobile_width(320.0));
        assert!(is_mobile_width(0.0));
    }

    #[test]
    fn wide_widths_are_desktop() {
        assert!(!is_mobile_width(1024.0));
        assert!(!is_mobile_width(1920.0));
    }

    #[test]
    fn windowless_default_is_desktop() {
        // no window reads as infinite width, which never trips the breakpoint
        assert!(!is_mobile_width(f64::INFINITY));
    }
}
