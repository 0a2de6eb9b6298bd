//! Stateless card renderers: one domain record in, markup out.

use web_sys::{HtmlImageElement, KeyboardEvent};
use yew::prelude::*;

use crate::effects::is_activation_key;
use crate::models::{BlogPost, EducationItem, Experience, Project};

pub const PLACEHOLDER_IMAGE: &str = "/placeholder-image.jpg";

/// Swaps a broken external image for the local placeholder. The guard keeps
/// a missing placeholder from looping the error handler.
pub fn image_fallback() -> Callback<Event> {
    Callback::from(|event: Event| {
        if let Some(image) = event.target_dyn_into::<HtmlImageElement>() {
            if !image.src().contains("placeholder-image") {
                image.set_src(PLACEHOLDER_IMAGE);
            }
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct EducationCardProps {
    pub item: EducationItem,
}

#[function_component(EducationCard)]
pub fn education_card(props: &EducationCardProps) -> Html {
    let item = &props.item;
    html! {
        <div class={classes!("glass", "timeline-card", item.kind.accent_class())}>
            <div class="timeline-marker" aria-hidden="true">
                <span>{item.kind.icon()}</span>
            </div>
            <div class="timeline-body">
                <div class="timeline-heading">
                    <h3>{&item.institution}</h3>
                    <span class="kind-badge">{item.kind.label()}</span>
                </div>
                <p class="timeline-degree">{&item.degree}</p>
                <p class="timeline-period">{&item.period}</p>
                <p class="muted">{&item.description}</p>
                if let Some(url) = &item.certificate_url {
                    <a
                        class="certificate-link"
                        href={url.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"View certificate ↗"}
                    </a>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    html! {
        <div class="glass project-card">
            <div class="card-media">
                <img
                    src={project.image.clone()}
                    alt={project.title.clone()}
                    loading="lazy"
                    onerror={image_fallback()}
                />
            </div>
            <div class="card-body">
                <h3>{&project.title}</h3>
                <p class="muted">{&project.description}</p>
                <div class="chip-row">
                    { for project.tags.iter().map(|tag| html! {
                        <span class="chip">{tag}</span>
                    }) }
                </div>
                <div class="card-links">
                    if let Some(url) = &project.repo_url {
                        <a href={url.clone()} target="_blank" rel="noopener noreferrer">
                            {"GitHub"}
                        </a>
                    }
                    if let Some(url) = &project.live_url {
                        <a href={url.clone()} target="_blank" rel="noopener noreferrer">
                            {"Live Demo"}
                        </a>
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExperienceCardProps {
    pub experience: Experience,
}

#[function_component(ExperienceCard)]
pub fn experience_card(props: &ExperienceCardProps) -> Html {
    let experience = &props.experience;
    html! {
        <div class="glass experience-card">
            <div class="experience-heading">
                <h3>{&experience.company}</h3>
                <span class="timeline-period">{experience.period()}</span>
            </div>
            <p class="experience-position">
                {&experience.position}
                if !experience.location.is_empty() {
                    <span class="muted">{format!(" · {}", experience.location)}</span>
                }
            </p>
            <p class="muted">{&experience.description}</p>
            if !experience.achievements.is_empty() {
                <ul class="achievement-list">
                    { for experience.achievements.iter().map(|entry| html! {
                        <li>{entry}</li>
                    }) }
                </ul>
            }
            <div class="chip-row">
                { for experience.technologies.iter().map(|tech| html! {
                    <span class="chip">{tech}</span>
                }) }
            </div>
        </div>
    }
}

/// Tag chips shown on a blog card before collapsing into a "+N more" badge.
const BLOG_TAG_LIMIT: usize = 3;

#[derive(Properties, PartialEq)]
pub struct BlogCardProps {
    pub post: BlogPost,
    pub on_open: Callback<String>,
}

#[function_component(BlogCard)]
pub fn blog_card(props: &BlogCardProps) -> Html {
    let post = &props.post;
    let onclick = {
        let on_open = props.on_open.clone();
        let slug = post.slug_or_id().to_string();
        Callback::from(move |_| on_open.emit(slug.clone()))
    };
    // The card carries a button role, so Enter and Space must open it too.
    let onkeydown = {
        let on_open = props.on_open.clone();
        let slug = post.slug_or_id().to_string();
        Callback::from(move |event: KeyboardEvent| {
            if is_activation_key(&event.key()) {
                event.prevent_default();
                on_open.emit(slug.clone());
            }
        })
    };
    let overflow = post.tags.len().saturating_sub(BLOG_TAG_LIMIT);

    html! {
        <div class="glass blog-card" {onclick} {onkeydown} role="button" tabindex="0">
            <div class="card-media">
                <img
                    src={post.image.clone()}
                    alt={post.title.clone()}
                    loading="lazy"
                    onerror={image_fallback()}
                />
                <span class="media-badge badge-date">{&post.date}</span>
                <span class="media-badge badge-read-time">{&post.read_time}</span>
            </div>
            <div class="card-body">
                <h3>{&post.title}</h3>
                <p class="muted">{&post.excerpt}</p>
                <div class="chip-row">
                    { for post.tags.iter().take(BLOG_TAG_LIMIT).map(|tag| html! {
                        <span class="chip">{tag}</span>
                    }) }
                    if overflow > 0 {
                        <span class="chip chip-muted">{format!("+{overflow} more")}</span>
                    }
                </div>
                <span class="read-more">{"Read article →"}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterButtonProps {
    pub label: AttrValue,
    pub count: usize,
    pub active: bool,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub accent: Option<AttrValue>,
}

#[function_component(FilterButton)]
pub fn filter_button(props: &FilterButtonProps) -> Html {
    let class = classes!(
        "filter-button",
        props.active.then_some("is-active"),
        props.active.then(|| props.accent.clone()).flatten(),
    );
    html! {
        <button {class} type="button" onclick={props.onclick.clone()}>
            {props.label.clone()}
            <span class="count-badge">{props.count}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    pub rating: u8,
}

#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    html! {
        <div class="star-rating" aria-label={format!("{} out of 5 stars", props.rating)}>
            { for (0..5u8).map(|index| {
                let class = if index < props.rating { "star star-filled" } else { "star" };
                html! { <span {class} aria-hidden="true">{"★"}</span> }
            }) }
        </div>
    }
}

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="spinner" role="status" aria-label="Loading"></div>
    }
}
