use crate::features::forms::{FieldErrors, optional_text, valid_http_url};
use serde::{Deserialize, Serialize};

pub const TITLE_MAX_CHARS: usize = 200;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for `POST /api/blogs` and `PUT /api/blogs/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostInput {
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
}

/// Raw editor state, one string per input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogDraft {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image: String,
    pub tags: String,
    pub published: bool,
}

impl BlogDraft {
    pub fn from_post(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone().unwrap_or_default(),
            content: post.content.clone(),
            cover_image: post.cover_image.clone().unwrap_or_default(),
            tags: post.tags.join(", "),
            published: post.published,
        }
    }
}

/// Lower-case ASCII alphanumerics; every other run of characters becomes a
/// single `-`, with none leading or trailing.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;

    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Splits comma separated tags, keeping the first spelling of each.
pub fn parse_tags(value: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in value.split(',').map(str::trim).filter(|tag| !tag.is_empty()) {
        if !tags.iter().any(|seen| seen.eq_ignore_ascii_case(tag)) {
            tags.push(tag.to_string());
        }
    }
    tags
}

pub fn validate_draft(draft: &BlogDraft) -> Result<BlogPostInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = draft.title.trim();
    if title.is_empty() {
        errors.insert("title", "Title is required");
    } else if title.chars().count() > TITLE_MAX_CHARS {
        errors.insert("title", format!("Title must be at most {TITLE_MAX_CHARS} characters"));
    }

    let content = draft.content.trim();
    if content.is_empty() {
        errors.insert("content", "Content is required");
    }

    let slug = if draft.slug.trim().is_empty() {
        slugify(title)
    } else {
        slugify(&draft.slug)
    };
    if slug.is_empty() && !title.is_empty() {
        errors.insert("slug", "Slug must contain letters or numbers");
    }

    let cover_image = optional_text(&draft.cover_image);
    if cover_image.as_deref().is_some_and(|url| !valid_http_url(url)) {
        errors.insert("cover_image", "Cover image must be an http(s) URL");
    }

    errors.into_result(BlogPostInput {
        title: title.to_string(),
        slug,
        excerpt: optional_text(&draft.excerpt),
        content: content.to_string(),
        cover_image,
        tags: parse_tags(&draft.tags),
        published: draft.published,
    })
}

#[cfg(test)]
mod tests {
    use super::{BlogDraft, BlogPost, parse_tags, slugify, validate_draft};

    fn draft() -> BlogDraft {
        BlogDraft {
            title: "Shipping Rust to the Browser".to_string(),
            content: "Body".to_string(),
            ..BlogDraft::default()
        }
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Hello, World!  "), "hello-world");
        assert_eq!(slugify("Rust & WASM -- 2024"), "rust-wasm-2024");
        assert_eq!(slugify("Café crème"), "caf-cr-me");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn parse_tags_trims_and_dedupes() {
        assert_eq!(
            parse_tags(" rust, wasm ,, Rust,leptos,"),
            vec!["rust".to_string(), "wasm".to_string(), "leptos".to_string()]
        );
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn slug_is_derived_from_title_when_blank() {
        let input = validate_draft(&draft()).ok();
        assert_eq!(
            input.map(|input| input.slug).as_deref(),
            Some("shipping-rust-to-the-browser")
        );
    }

    #[test]
    fn explicit_slug_is_normalized() {
        let mut draft = draft();
        draft.slug = "My Custom Slug".to_string();
        let input = validate_draft(&draft).ok();
        assert_eq!(input.map(|input| input.slug).as_deref(), Some("my-custom-slug"));
    }

    #[test]
    fn missing_title_and_content_are_reported() {
        let errors = validate_draft(&BlogDraft::default()).err().unwrap_or_default();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.get("content"), Some("Content is required"));
        assert_eq!(errors.get("slug"), None);
    }

    #[test]
    fn long_title_is_rejected() {
        let mut draft = draft();
        draft.title = "a".repeat(201);
        let errors = validate_draft(&draft).err().unwrap_or_default();
        assert_eq!(errors.get("title"), Some("Title must be at most 200 characters"));

        draft.title = "a".repeat(200);
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn cover_image_must_be_http() {
        let mut draft = draft();
        draft.cover_image = "javascript:alert(1)".to_string();
        let errors = validate_draft(&draft).err().unwrap_or_default();
        assert!(errors.get("cover_image").is_some());
    }

    #[test]
    fn post_deserializes_backend_shape() {
        let json = r#"{"_id":"p1","title":"T","slug":"t","content":"c","coverImage":"https://x.io/a.png","tags":["a"],"published":true,"createdAt":"2024-01-01"}"#;
        let post: BlogPost = serde_json::from_str(json).unwrap_or_default();
        assert_eq!(post.id, "p1");
        assert_eq!(post.cover_image.as_deref(), Some("https://x.io/a.png"));
        assert!(post.published);

        let draft = BlogDraft::from_post(&post);
        assert_eq!(draft.tags, "a");
    }
}
