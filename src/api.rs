//! Fetch boundary for the backend REST API. Response-shape tolerance lives
//! here and nowhere else: components only ever see normalized collections.

use crate::models::{BlogPost, Review};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Wrapper keys the blog collection has been observed under, in precedence
/// order. A bare array wins over all of them.
const BLOG_WRAPPER_KEYS: [&str; 3] = ["posts", "blogs", "data"];

#[derive(Clone, PartialEq, Eq, Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// The reviews endpoint wraps its list: `{ "reviews": [...] }`.
#[derive(Deserialize, Default)]
pub struct ReviewsEnvelope {
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Accepts the blog collection as a bare list or wrapped under one of the
/// known keys; anything else degrades to an empty list with a console
/// warning instead of failing the whole load.
pub fn normalize_blog_payload(payload: Value) -> Vec<BlogPost> {
    if payload.is_array() {
        return decode_posts(payload).unwrap_or_else(|| {
            warn_unrecognized_shape();
            Vec::new()
        });
    }
    if let Value::Object(mut map) = payload {
        for key in BLOG_WRAPPER_KEYS {
            if let Some(inner) = map.remove(key) {
                return decode_posts(inner).unwrap_or_else(|| {
                    warn_unrecognized_shape();
                    Vec::new()
                });
            }
        }
    }
    warn_unrecognized_shape();
    Vec::new()
}

fn decode_posts(value: Value) -> Option<Vec<BlogPost>> {
    serde_json::from_value(value).ok()
}

fn warn_unrecognized_shape() {
    #[cfg(target_arch = "wasm32")]
    gloo_console::warn!("blog payload arrived in an unrecognized shape; rendering no posts");
}

/// One page load's worth of backend content. `Default` is the empty shape
/// every slot resets to when any fetch fails.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct PortfolioData {
    pub content: crate::models::SiteContent,
    pub education: Vec<crate::models::EducationItem>,
    pub projects: Vec<crate::models::Project>,
    pub experience: Vec<crate::models::Experience>,
    pub skills: Vec<crate::models::Skill>,
    pub posts: Vec<BlogPost>,
    pub reviews: Vec<Review>,
}

/// Canonical URL for a post, used by the share action.
pub fn canonical_post_url(origin: &str, slug: &str) -> String {
    format!("{}/blog/{slug}", origin.trim_end_matches('/'))
}

#[cfg(target_arch = "wasm32")]
pub use fetch::{fetch_blog_post, fetch_portfolio_data};

#[cfg(target_arch = "wasm32")]
mod fetch {
    use super::{normalize_blog_payload, ApiError, PortfolioData, ReviewsEnvelope};
    use crate::config;
    use crate::models::{BlogPost, EducationItem, Experience, Project, SiteContent, Skill};
    use gloo_net::http::Request;
    use serde::de::DeserializeOwned;
    use serde_json::Value;

    async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let response = Request::get(&config::api_url(path))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Issues the seven collection fetches concurrently. All-or-nothing: the
    /// first failure fails the whole load and the caller resets every slot.
    pub async fn fetch_portfolio_data() -> Result<PortfolioData, ApiError> {
        let (content, education, projects, experience, skills, blog, reviews) = futures::try_join!(
            get_json::<SiteContent>("/api/content"),
            get_json::<Vec<EducationItem>>("/api/education"),
            get_json::<Vec<Project>>("/api/projects"),
            get_json::<Vec<Experience>>("/api/experience"),
            get_json::<Vec<Skill>>("/api/skills"),
            get_json::<Value>("/api/blog"),
            get_json::<ReviewsEnvelope>("/api/reviews"),
        )?;

        Ok(PortfolioData {
            content,
            education,
            projects,
            experience,
            skills,
            posts: normalize_blog_payload(blog),
            reviews: reviews.reviews,
        })
    }

    /// Single-post fetch for the detail overlay. Every failure class maps to
    /// the not-found view, so the error detail only matters for the console.
    pub async fn fetch_blog_post(slug: &str) -> Result<BlogPost, ApiError> {
        get_json(&format!("/api/blog/{slug}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_is_accepted() {
        let posts = normalize_blog_payload(json!([
            {"_id": "1", "title": "First"},
            {"_id": "2", "title": "Second"}
        ]));
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "First");
    }

    #[test]
    fn wrapper_keys_resolve_in_precedence_order() {
        let posts = normalize_blog_payload(json!({
            "data": [{"_id": "d", "title": "from data"}],
            "posts": [{"_id": "p", "title": "from posts"}]
        }));
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "from posts");

        let posts = normalize_blog_payload(json!({
            "data": [{"_id": "d"}],
            "blogs": [{"_id": "b"}]
        }));
        assert_eq!(posts[0].id, "b");
    }

    #[test]
    fn unrecognized_wrapper_degrades_to_empty() {
        assert!(normalize_blog_payload(json!({"articles": []})).is_empty());
        assert!(normalize_blog_payload(json!("nonsense")).is_empty());
        assert!(normalize_blog_payload(json!(null)).is_empty());
    }

    #[test]
    fn wrapper_with_non_list_value_degrades_to_empty() {
        assert!(normalize_blog_payload(json!({"posts": "not a list"})).is_empty());
    }

    #[test]
    fn reviews_envelope_decodes_with_and_without_entries() {
        let envelope: ReviewsEnvelope =
            serde_json::from_value(json!({"reviews": [{"_id": "r", "isActive": true}]})).unwrap();
        assert_eq!(envelope.reviews.len(), 1);

        let empty: ReviewsEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(empty.reviews.is_empty());
    }

    #[test]
    fn canonical_post_url_joins_origin_and_slug() {
        assert_eq!(
            canonical_post_url("https://example.com/", "my-post"),
            "https://example.com/blog/my-post"
        );
    }
}
