//! Client wrappers for the blog endpoints. Reads are public; writes carry the
//! admin bearer header supplied by the caller.

pub fn post_path(id: &str) -> String {
    format!("/api/blogs/{}", id.trim())
}

pub fn slug_path(slug: &str) -> String {
    format!("/api/blogs/slug/{}", slug.trim())
}

pub const PUBLISHED_PATH: &str = "/api/blogs?published=true";

#[cfg(target_arch = "wasm32")]
pub use http::*;

#[cfg(target_arch = "wasm32")]
mod http {
    use super::{PUBLISHED_PATH, post_path, slug_path};
    use crate::app_lib::{
        AppError, delete_with_headers, get_json, get_json_with_headers, post_json_response,
        put_json_response,
    };
    use crate::features::blog::types::{BlogPost, BlogPostInput};

    /// Published posts for the public blog.
    pub async fn list_published() -> Result<Vec<BlogPost>, AppError> {
        get_json(PUBLISHED_PATH).await
    }

    pub async fn get_by_slug(slug: &str) -> Result<BlogPost, AppError> {
        if slug.trim().is_empty() {
            return Err(AppError::Validation("Post slug is required.".to_string()));
        }
        get_json(&slug_path(slug)).await
    }

    /// Every post, drafts included.
    pub async fn list_all(headers: &[(String, String)]) -> Result<Vec<BlogPost>, AppError> {
        get_json_with_headers("/api/blogs", headers).await
    }

    pub async fn get_post(id: &str, headers: &[(String, String)]) -> Result<BlogPost, AppError> {
        get_json_with_headers(&post_path(id), headers).await
    }

    pub async fn create_post(
        input: &BlogPostInput,
        headers: &[(String, String)],
    ) -> Result<BlogPost, AppError> {
        post_json_response("/api/blogs", input, headers).await
    }

    pub async fn update_post(
        id: &str,
        input: &BlogPostInput,
        headers: &[(String, String)],
    ) -> Result<BlogPost, AppError> {
        put_json_response(&post_path(id), input, headers).await
    }

    pub async fn delete_post(id: &str, headers: &[(String, String)]) -> Result<(), AppError> {
        delete_with_headers(&post_path(id), headers).await
    }
}
