//! Main page: issues the seven collection fetches on mount and renders every
//! section against the result. All-or-nothing — any failure resets the whole
//! data set to its empty defaults and raises one error toast.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{fetch_portfolio_data, PortfolioData};
use crate::app::{Route, ScrollToBlog};
use crate::components::cards::{
    image_fallback, BlogCard, EducationCard, ExperienceCard, FilterButton, ProjectCard, Spinner,
};
use crate::components::contact_form::ContactSection;
use crate::components::grid_glow::GridGlow;
use crate::components::nav::Nav;
use crate::components::scroll_to_section;
use crate::components::testimonials::Testimonials;
use crate::components::toast::use_toaster;
use crate::components::typewriter::TypewriterText;
use crate::models::{filter_education, kind_counts, EducationFilter, EducationKind};

enum LoadState {
    Loading,
    /// Holds the fetched collections, or the empty defaults after a failed
    /// load. Partial success is never retained.
    Loaded(Box<PortfolioData>),
}

#[function_component(Home)]
pub fn home() -> Html {
    let load = use_state(|| LoadState::Loading);
    let education_filter = use_state(|| EducationFilter::All);
    let pending_blog_scroll = use_state(|| false);
    let toaster = use_toaster();
    let navigator = use_navigator();
    let location = use_location();

    {
        let load = load.clone();
        let toaster = toaster.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_portfolio_data().await {
                    Ok(data) => load.set(LoadState::Loaded(Box::new(data))),
                    Err(err) => {
                        gloo_console::error!(format!("portfolio load failed: {err}"));
                        toaster.error("Failed to load portfolio content. Please refresh the page.");
                        load.set(LoadState::Loaded(Box::default()));
                    }
                }
            });
            || ()
        });
    }

    // Consume the one-shot "scroll to blog" signal left by the detail
    // overlay: latch it locally, then clear the history state so returning
    // here later does not re-trigger the scroll.
    {
        let pending_blog_scroll = pending_blog_scroll.clone();
        let navigator = navigator.clone();
        let location = location.clone();
        use_effect_with((), move |_| {
            if let (Some(location), Some(navigator)) = (location, navigator) {
                if location.state::<ScrollToBlog>().is_some() {
                    pending_blog_scroll.set(true);
                    navigator.replace(&Route::Home);
                }
            }
            || ()
        });
    }

    // The blog section only exists once the load settles, so the actual
    // scroll waits for both.
    {
        let pending_blog_scroll = pending_blog_scroll.clone();
        let settled = matches!(&*load, LoadState::Loaded(_));
        use_effect_with((settled, *pending_blog_scroll), move |(settled, pending)| {
            if *settled && *pending {
                scroll_to_section("blog");
                pending_blog_scroll.set(false);
            }
            || ()
        });
    }

    let data = match &*load {
        LoadState::Loading => {
            return html! {
                <div class="full-page-state">
                    <Spinner />
                </div>
            };
        }
        LoadState::Loaded(data) => data,
    };

    let on_open_post = {
        let navigator = navigator.clone();
        Callback::from(move |slug: String| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::BlogPost { slug });
            }
        })
    };

    let counts = kind_counts(&data.education);
    let filtered_education = filter_education(&data.education, *education_filter);
    let set_filter = |filter: EducationFilter| {
        let education_filter = education_filter.clone();
        Callback::from(move |_| education_filter.set(filter))
    };
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="page">
            <Nav />

            <section id="home" class="hero">
                <GridGlow />
                <div class="hero-content">
                    <div class="hero-portrait glass">
                        <img src="/hero.png" alt="Garv Kamra" onerror={image_fallback()} />
                    </div>
                    <h1>
                        <span class="text-gradient">{"Hello"}</span>
                        {", "}
                        <TypewriterText phrases={data.content.typewriter_texts.clone()} />
                    </h1>
                    <p class="muted hero-lede">{&data.content.hero_paragraph}</p>
                    <div class="hero-actions">
                        if !data.content.resume_url.is_empty() {
                            <a
                                class="button-primary"
                                href={data.content.resume_url.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"Download Resume"}
                            </a>
                        }
                        <a
                            class="button-ghost glass"
                            href="#contact"
                            onclick={Callback::from(|event: MouseEvent| {
                                event.prevent_default();
                                scroll_to_section("contact");
                            })}
                        >
                            {"Get in touch"}
                        </a>
                    </div>
                </div>
            </section>

            <section id="about" class="section">
                <div class="section-heading">
                    <h2>{"About "}<span class="text-gradient">{"Me"}</span></h2>
                    <p class="muted">{"Get to know me, my skills, and what drives my work."}</p>
                </div>
                <div class="about-grid">
                    <div class="glass about-card">
                        <h3>{"Who I Am"}</h3>
                        <p class="muted">{&data.content.about.who_i_am}</p>
                    </div>
                    <div class="glass about-card">
                        <h3>{"My Expertise"}</h3>
                        <p class="muted">{&data.content.about.expertise}</p>
                    </div>
                    <div class="glass about-card">
                        <h3>{"My Mission"}</h3>
                        <p class="muted">{&data.content.about.mission}</p>
                    </div>
                </div>
                if !data.content.about.journey.is_empty() {
                    <div class="glass journey-card">
                        <h3>{"My "}<span class="text-gradient">{"Journey"}</span></h3>
                        { for data.content.about.journey.iter().map(|paragraph| html! {
                            <p class="muted">{paragraph}</p>
                        }) }
                    </div>
                }
                <div class="skills-block">
                    <h3>{"My "}<span class="text-gradient">{"Skills"}</span></h3>
                    <div class="skills-grid">
                        { for data.skills.iter().map(|skill| html! {
                            <div class="glass skill-card" key={skill.id.clone()}>
                                <div class="skill-heading">
                                    if !skill.icon.is_empty() {
                                        <img src={skill.icon.clone()} alt="" onerror={image_fallback()} />
                                    }
                                    <span>{&skill.name}</span>
                                    <span class="muted">{format!("{}%", skill.proficiency)}</span>
                                </div>
                                <div class="skill-track">
                                    <div
                                        class="skill-bar"
                                        style={format!("width: {}%;", skill.proficiency)}
                                    ></div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="education" class="section section-alt">
                <div class="section-heading">
                    <h2>{"Education & "}<span class="text-gradient">{"Credentials"}</span></h2>
                    <p class="muted">
                        {"A timeline of my educational background, certifications, achievements, \
                          and publications."}
                    </p>
                </div>
                <div class="filter-row">
                    <FilterButton
                        label="All"
                        count={counts.all}
                        active={*education_filter == EducationFilter::All}
                        onclick={set_filter(EducationFilter::All)}
                    />
                    <FilterButton
                        label="Education"
                        count={counts.education}
                        active={*education_filter == EducationFilter::Kind(EducationKind::Education)}
                        onclick={set_filter(EducationFilter::Kind(EducationKind::Education))}
                        accent="accent-purple"
                    />
                    <FilterButton
                        label="Certifications"
                        count={counts.certification}
                        active={*education_filter == EducationFilter::Kind(EducationKind::Certification)}
                        onclick={set_filter(EducationFilter::Kind(EducationKind::Certification))}
                        accent="accent-blue"
                    />
                    <FilterButton
                        label="Achievements"
                        count={counts.achievement}
                        active={*education_filter == EducationFilter::Kind(EducationKind::Achievement)}
                        onclick={set_filter(EducationFilter::Kind(EducationKind::Achievement))}
                        accent="accent-amber"
                    />
                    <FilterButton
                        label="Publications"
                        count={counts.publication}
                        active={*education_filter == EducationFilter::Kind(EducationKind::Publication)}
                        onclick={set_filter(EducationFilter::Kind(EducationKind::Publication))}
                        accent="accent-emerald"
                    />
                </div>
                <div class="timeline">
                    { for filtered_education.iter().map(|item| html! {
                        <EducationCard key={item.id.clone()} item={item.clone()} />
                    }) }
                </div>
            </section>

            <section id="projects" class="section">
                <div class="section-heading">
                    <h2>{"My "}<span class="text-gradient">{"Projects"}</span></h2>
                    <p class="muted">{"A showcase of my work across security and development."}</p>
                </div>
                <div class="project-grid">
                    { for data.projects.iter().map(|project| html! {
                        <ProjectCard key={project.id.clone()} project={project.clone()} />
                    }) }
                </div>
            </section>

            <section id="experience" class="section section-alt">
                <div class="section-heading">
                    <h2>{"My "}<span class="text-gradient">{"Experience"}</span></h2>
                    <p class="muted">{"A chronological journey through my professional roles."}</p>
                </div>
                <div class="experience-list">
                    { for data.experience.iter().map(|experience| html! {
                        <ExperienceCard key={experience.id.clone()} experience={experience.clone()} />
                    }) }
                </div>
            </section>

            <section id="blog" class="section">
                <div class="section-heading">
                    <h2>{"Latest "}<span class="text-gradient">{"Articles"}</span></h2>
                    <p class="muted">{"Notes on security, development, and everything between."}</p>
                </div>
                <div class="blog-grid">
                    { for data.posts.iter().map(|post| html! {
                        <BlogCard
                            key={post.id.clone()}
                            post={post.clone()}
                            on_open={on_open_post.clone()}
                        />
                    }) }
                </div>
            </section>

            <Testimonials reviews={data.reviews.clone()} />

            <ContactSection />

            <footer class="site-footer muted">
                {format!("© {year} Garv Kamra. All rights reserved.")}
            </footer>
        </div>
    }
}
