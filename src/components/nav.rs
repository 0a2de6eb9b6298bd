//! Fixed navigation shell: scroll-position detection, in-page section links,
//! the availability pill, and the slide-in mobile panel.

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;

use crate::components::scroll_to_section;

/// Scroll offset past which the header tightens up.
const SCROLL_THRESHOLD: f64 = 20.0;
/// How long the mobile availability pill stays expanded.
const AVAILABILITY_HIDE_MS: u32 = 3_000;

const SECTION_LINKS: [(&str, &str); 8] = [
    ("home", "Home"),
    ("about", "About"),
    ("education", "Education"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("blog", "Blogs"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let scrolled = use_state(|| false);
    let menu_open = use_state(|| false);
    let availability_shown = use_state(|| false);
    let availability_timer = use_mut_ref(|| None::<Timeout>);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|w| {
                EventListener::new(&w, "scroll", move |_| {
                    let offset = window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    scrolled.set(offset > SCROLL_THRESHOLD);
                })
            });
            move || drop(listener)
        });
    }

    let on_toggle_availability = {
        let availability_shown = availability_shown.clone();
        let availability_timer = availability_timer.clone();
        Callback::from(move |_| {
            let next = !*availability_shown;
            availability_shown.set(next);
            if next {
                let availability_shown = availability_shown.clone();
                // Replacing the handle cancels any pending hide.
                *availability_timer.borrow_mut() = Some(Timeout::new(AVAILABILITY_HIDE_MS, move || {
                    availability_shown.set(false);
                }));
            }
        })
    };

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let section_link = |id: &'static str, label: &'static str, close_menu: bool| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            scroll_to_section(id);
            if close_menu {
                menu_open.set(false);
            }
        });
        html! {
            <a href={format!("#{id}")} {onclick}>{label}</a>
        }
    };

    html! {
        <header class={classes!("site-nav", scrolled.then_some("is-scrolled"))}>
            <nav class="nav-inner">
                <div class="availability">
                    <div class="availability-pill glass">
                        <span class="status-dot" aria-hidden="true"></span>
                        <span>{"Available for Projects"}</span>
                    </div>
                    <button
                        class="availability-dot-button"
                        type="button"
                        aria-label="Availability status"
                        onclick={on_toggle_availability}
                    >
                        <span class="status-dot" aria-hidden="true"></span>
                        if *availability_shown {
                            <span class="availability-popover glass">{"Available for Projects"}</span>
                        }
                    </button>
                </div>

                <div class="nav-links glass">
                    <a
                        class="brand"
                        href="#home"
                        onclick={Callback::from(|event: MouseEvent| {
                            event.prevent_default();
                            scroll_to_section("home");
                        })}
                    >
                        {".SecureGarv"}
                    </a>
                    { for SECTION_LINKS.iter().map(|(id, label)| section_link(id, label, false)) }
                </div>

                <div class="nav-social glass">
                    <a href="https://github.com/Securegarv20" target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        {"GitHub"}
                    </a>
                    <a href="https://www.linkedin.com/in/garvkamra/" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        {"LinkedIn"}
                    </a>
                    <a href="mailto:garvkamra24@gmail.com" aria-label="Email">{"Email"}</a>
                </div>

                <button
                    class="menu-toggle"
                    type="button"
                    aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={menu_open.to_string()}
                    onclick={on_toggle_menu}
                >
                    <span aria-hidden="true">{if *menu_open { "✕" } else { "☰" }}</span>
                </button>
            </nav>

            <div class={classes!("mobile-panel", "glass", menu_open.then_some("is-open"))}>
                { for SECTION_LINKS.iter().map(|(id, label)| section_link(id, label, true)) }
            </div>
        </header>
    }
}
