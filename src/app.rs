use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::blog_detail::BlogDetail;
use crate::components::toast::{ToastHost, ToastState, Toaster};
use crate::pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// One-shot navigation signal: pushed as history state when the blog detail
/// overlay closes, consumed exactly once by the home page (which scrolls to
/// the blog section and then clears it).
pub struct ScrollToBlog;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::BlogPost { slug } => html! { <BlogDetail {slug} /> },
        Route::NotFound => html! {
            <div class="full-page-state">
                <div class="full-page-card">
                    <h2>{"Page Not Found"}</h2>
                    <Link<Route> to={Route::Home} classes="button-primary">
                        {"Back to Home"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(App)]
fn app() -> Html {
    let toasts = use_reducer(ToastState::default);
    let toaster = Toaster::new(toasts);

    html! {
        <ContextProvider<Toaster> context={toaster}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <ToastHost />
        </ContextProvider<Toaster>>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
