//! View records fetched from the backend. Everything is decoded tolerantly:
//! missing fields fall back to empty defaults so a partial record renders as
//! blanks instead of failing the whole collection, and `_id` is accepted
//! wherever the backend emits Mongo-style identifiers.

use serde::Deserialize;

#[derive(Clone, PartialEq, Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteContent {
    pub typewriter_texts: Vec<String>,
    pub hero_paragraph: String,
    pub resume_url: String,
    pub about: AboutContent,
}

#[derive(Clone, PartialEq, Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutContent {
    pub who_i_am: String,
    pub expertise: String,
    pub mission: String,
    pub journey: Vec<String>,
}

/// The four credential kinds the timeline knows how to badge. Anything else
/// the backend sends decodes as `Other` and renders with the default accent.
#[derive(Clone, Copy, PartialEq, Eq, Deserialize, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum EducationKind {
    Education,
    Certification,
    Achievement,
    Publication,
    #[default]
    #[serde(other)]
    Other,
}

impl EducationKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Certification => "certification",
            Self::Achievement => "achievement",
            Self::Publication => "publication",
            Self::Other => "other",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Education => "🎓",
            Self::Certification => "📜",
            Self::Achievement => "🏆",
            Self::Publication => "📄",
            Self::Other => "🎓",
        }
    }

    pub fn accent_class(self) -> &'static str {
        match self {
            Self::Education => "accent-purple",
            Self::Certification => "accent-blue",
            Self::Achievement => "accent-amber",
            Self::Publication => "accent-emerald",
            Self::Other => "accent-primary",
        }
    }
}

#[derive(Clone, PartialEq, Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationItem {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EducationKind,
    pub institution: String,
    pub degree: String,
    pub period: String,
    pub description: String,
    #[serde(alias = "certificateLink")]
    pub certificate_url: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(alias = "technologies")]
    pub tags: Vec<String>,
    pub image: String,
    pub category: String,
    #[serde(alias = "github")]
    pub repo_url: Option<String>,
    #[serde(alias = "liveDemo")]
    pub live_url: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(alias = "_id")]
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub is_current: bool,
}

impl Experience {
    /// Display range; a current role never shows its stored end date.
    pub fn period(&self) -> String {
        let end = if self.is_current {
            "Present"
        } else {
            self.end_date.as_str()
        };
        format!("{} – {end}", self.start_date)
    }
}

#[derive(Clone, PartialEq, Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Percentage rendered as a bar width. Out-of-range values pass through;
    /// clamping is the backend's problem.
    pub proficiency: u32,
}

#[derive(Clone, PartialEq, Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    #[serde(alias = "_id")]
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Raw HTML, injected as-is. The backend is trusted to sanitize it.
    pub content: String,
    pub date: String,
    pub read_time: String,
    pub image: String,
    pub tags: Vec<String>,
}

impl BlogPost {
    pub fn slug_or_id(&self) -> &str {
        if self.slug.is_empty() {
            &self.id
        } else {
            &self.slug
        }
    }
}

#[derive(Clone, PartialEq, Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase", default)]
pub struct Review {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub position: String,
    pub company: Option<String>,
    pub rating: u8,
    pub text: String,
    pub project_type: String,
    pub is_active: bool,
    pub featured: bool,
    pub order: i64,
    pub created_at: String,
}

/// Only reviews flagged active are eligible for the carousel.
pub fn active_reviews(reviews: &[Review]) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| review.is_active)
        .cloned()
        .collect()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EducationFilter {
    All,
    Kind(EducationKind),
}

pub fn filter_education(items: &[EducationItem], filter: EducationFilter) -> Vec<EducationItem> {
    items
        .iter()
        .filter(|item| match filter {
            EducationFilter::All => true,
            EducationFilter::Kind(kind) => item.kind == kind,
        })
        .cloned()
        .collect()
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct KindCounts {
    pub all: usize,
    pub education: usize,
    pub certification: usize,
    pub achievement: usize,
    pub publication: usize,
}

/// Badge counts for the filter row. "All" counts every entry regardless of
/// the active filter.
pub fn kind_counts(items: &[EducationItem]) -> KindCounts {
    let of = |kind| items.iter().filter(|item| item.kind == kind).count();
    KindCounts {
        all: items.len(),
        education: of(EducationKind::Education),
        certification: of(EducationKind::Certification),
        achievement: of(EducationKind::Achievement),
        publication: of(EducationKind::Publication),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn education_fixture() -> Vec<EducationItem> {
        serde_json::from_str(
            r#"[
                {"id": "1", "type": "education", "institution": "Jain University"},
                {"id": "2", "type": "certification", "institution": "EC-Council"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn certification_filter_keeps_only_matching_entries() {
        let items = education_fixture();
        let filtered = filter_education(&items, EducationFilter::Kind(EducationKind::Certification));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn counts_ignore_the_active_filter() {
        let items = education_fixture();
        let counts = kind_counts(&items);
        assert_eq!(counts.all, 2);
        assert_eq!(counts.education, 1);
        assert_eq!(counts.certification, 1);
        assert_eq!(counts.publication, 0);
    }

    #[test]
    fn unknown_education_kind_falls_back_to_other() {
        let item: EducationItem =
            serde_json::from_str(r#"{"id": "x", "type": "bootcamp"}"#).unwrap();
        assert_eq!(item.kind, EducationKind::Other);
        assert_eq!(item.kind.accent_class(), "accent-primary");
    }

    #[test]
    fn mongo_style_ids_are_accepted() {
        let review: Review =
            serde_json::from_str(r#"{"_id": "abc", "isActive": true, "rating": 5}"#).unwrap();
        assert_eq!(review.id, "abc");
        assert!(review.is_active);
    }

    #[test]
    fn missing_fields_decode_as_defaults() {
        let post: BlogPost = serde_json::from_str(r#"{"_id": "p1", "title": "Hello"}"#).unwrap();
        assert_eq!(post.slug_or_id(), "p1");
        assert!(post.tags.is_empty());

        let content: SiteContent = serde_json::from_str("{}").unwrap();
        assert!(content.typewriter_texts.is_empty());
    }

    #[test]
    fn only_active_reviews_are_displayable() {
        let reviews: Vec<Review> = serde_json::from_str(
            r#"[
                {"_id": "a", "isActive": true},
                {"_id": "b", "isActive": false},
                {"_id": "c", "isActive": true}
            ]"#,
        )
        .unwrap();
        let display = active_reviews(&reviews);
        assert_eq!(
            display.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            ["a", "c"]
        );
    }

    #[test]
    fn current_role_renders_present_instead_of_end_date() {
        let experience: Experience = serde_json::from_str(
            r#"{"id": "e", "startDate": "Jan 2024", "endDate": "Dec 2024", "isCurrent": true}"#,
        )
        .unwrap();
        assert_eq!(experience.period(), "Jan 2024 – Present");
    }

    #[test]
    fn finished_role_keeps_its_end_date() {
        let experience: Experience = serde_json::from_str(
            r#"{"id": "e", "startDate": "Jan 2023", "endDate": "Jun 2023", "isCurrent": false}"#,
        )
        .unwrap();
        assert_eq!(experience.period(), "Jan 2023 – Jun 2023");
    }
}
