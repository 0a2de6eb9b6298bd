//! Full-screen blog post overlay, routed at `/blog/:slug`. Locks background
//! scroll while mounted, closes on Escape, and shares via the native share
//! sheet with a copy-link fallback.

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{canonical_post_url, fetch_blog_post};
use crate::app::{Route, ScrollToBlog};
use crate::components::cards::{image_fallback, Spinner};
use crate::components::document;
use crate::models::BlogPost;

/// How long the "copied" confirmation stays up.
const COPIED_INDICATOR_MS: u32 = 2_000;

enum DetailState {
    Loading,
    NotFound,
    Found(Box<BlogPost>),
}

#[derive(Properties, PartialEq)]
pub struct BlogDetailProps {
    pub slug: String,
}

#[function_component(BlogDetail)]
pub fn blog_detail(props: &BlogDetailProps) -> Html {
    let state = use_state(|| DetailState::Loading);
    let copied = use_state(|| false);
    let copied_timer = use_mut_ref(|| None::<Timeout>);
    let navigator = use_navigator();

    // Closing returns to the main page with a one-shot signal to scroll to
    // the blog listing; the home page consumes and clears it.
    let close = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| {
            if let Some(navigator) = &navigator {
                navigator.push_with_state(&Route::Home, ScrollToBlog);
            }
        })
    };

    {
        let state = state.clone();
        use_effect_with(props.slug.clone(), move |slug| {
            let slug = slug.clone();
            state.set(DetailState::Loading);
            spawn_local(async move {
                // Every failure class reads as "not found" here; the detail
                // only matters for the console.
                match fetch_blog_post(&slug).await {
                    Ok(post) => state.set(DetailState::Found(Box::new(post))),
                    Err(err) => {
                        gloo_console::warn!(format!("blog post fetch failed: {err}"));
                        state.set(DetailState::NotFound);
                    }
                }
            });
            || ()
        });
    }

    // Background scroll lock, restored unconditionally on unmount.
    use_effect_with((), move |_| {
        if let Some(body) = document().and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", "hidden");
        }
        || {
            if let Some(body) = document().and_then(|d| d.body()) {
                let _ = body.style().remove_property("overflow");
            }
        }
    });

    // Escape closes, same path as the buttons. Listener drops with the
    // component.
    {
        let close = close.clone();
        use_effect_with((), move |_| {
            let listener = document().map(|doc| {
                EventListener::new(&doc, "keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        if event.key() == "Escape" {
                            close.emit(());
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_close = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    match &*state {
        DetailState::Loading => html! {
            <div class="full-page-state">
                <Spinner />
            </div>
        },
        DetailState::NotFound => html! {
            <div class="full-page-state">
                <div class="full-page-card">
                    <h2>{"Blog Post Not Found"}</h2>
                    <button class="button-primary" type="button" onclick={on_close}>
                        {"Back to Home"}
                    </button>
                </div>
            </div>
        },
        DetailState::Found(post) => {
            let on_share = {
                let copied = copied.clone();
                let copied_timer = copied_timer.clone();
                let title = post.title.clone();
                let excerpt = post.excerpt.clone();
                let slug = post.slug_or_id().to_string();
                Callback::from(move |_: MouseEvent| {
                    let copied = copied.clone();
                    let copied_timer = copied_timer.clone();
                    let title = title.clone();
                    let excerpt = excerpt.clone();
                    let origin = window()
                        .and_then(|w| w.location().origin().ok())
                        .unwrap_or_default();
                    let url = canonical_post_url(&origin, &slug);
                    spawn_local(async move {
                        if try_native_share(&title, &excerpt, &url).await {
                            return;
                        }
                        if copy_to_clipboard(&url).await {
                            copied.set(true);
                            let copied = copied.clone();
                            *copied_timer.borrow_mut() =
                                Some(Timeout::new(COPIED_INDICATOR_MS, move || {
                                    copied.set(false);
                                }));
                        }
                    });
                })
            };

            html! {
                <div class="blog-overlay">
                    <header class="overlay-header">
                        <button class="back-button" type="button" onclick={on_close.clone()}>
                            {"← Back to Portfolio"}
                        </button>
                        <div class="overlay-actions">
                            <button class="share-button" type="button" onclick={on_share}>
                                {if *copied { "Copied!" } else { "Share" }}
                            </button>
                            <button
                                class="close-button"
                                type="button"
                                aria-label="Close article"
                                onclick={on_close}
                            >
                                {"✕"}
                            </button>
                        </div>
                    </header>

                    <article class="overlay-article">
                        <header class="article-header">
                            <div class="chip-row">
                                { for post.tags.iter().map(|tag| html! {
                                    <span class="chip">{tag}</span>
                                }) }
                            </div>
                            <h1>{&post.title}</h1>
                            <p class="article-excerpt muted">{&post.excerpt}</p>
                            <div class="article-meta muted">
                                <span>{&post.date}</span>
                                <span class="meta-divider" aria-hidden="true"></span>
                                <span>{&post.read_time}</span>
                            </div>
                        </header>
                        if !post.image.is_empty() {
                            <img
                                class="article-image"
                                src={post.image.clone()}
                                alt={post.title.clone()}
                                onerror={image_fallback()}
                            />
                        }
                        <div class="article-content">
                            {Html::from_html_unchecked(AttrValue::from(post.content.clone()))}
                        </div>
                    </article>
                </div>
            }
        }
    }
}

/// Feature-detects `navigator.share` through `Reflect`, the same way the
/// optional view-transition API is probed elsewhere. Returns `true` only if
/// the native sheet opened and resolved.
async fn try_native_share(title: &str, text: &str, url: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let navigator: JsValue = win.navigator().into();
    let Ok(share) = Reflect::get(&navigator, &JsValue::from_str("share")) else {
        return false;
    };
    let Some(share) = share.dyn_ref::<Function>() else {
        return false;
    };

    let data: JsValue = js_sys::Object::new().into();
    let populated = Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(title))
        .and_then(|_| Reflect::set(&data, &JsValue::from_str("text"), &JsValue::from_str(text)))
        .and_then(|_| Reflect::set(&data, &JsValue::from_str("url"), &JsValue::from_str(url)));
    if populated.is_err() {
        return false;
    }

    let Ok(result) = share.call1(&navigator, &data) else {
        return false;
    };
    let Ok(promise) = result.dyn_into::<Promise>() else {
        return false;
    };
    JsFuture::from(promise).await.is_ok()
}

async fn copy_to_clipboard(text: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let promise = win.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.is_ok()
}
