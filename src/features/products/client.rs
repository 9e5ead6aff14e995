//! Client wrappers for `/api/products`. Listing is public; writes carry the
//! admin bearer header.

pub fn product_path(id: &str) -> String {
    format!("/api/products/{}", id.trim())
}

#[cfg(target_arch = "wasm32")]
pub use http::*;

#[cfg(target_arch = "wasm32")]
mod http {
    use super::product_path;
    use crate::app_lib::{
        AppError, delete_with_headers, get_json, get_json_with_headers, post_json_response,
        put_json_response,
    };
    use crate::features::products::types::{Product, ProductInput};

    pub async fn list_products() -> Result<Vec<Product>, AppError> {
        get_json("/api/products").await
    }

    pub async fn get_product(id: &str, headers: &[(String, String)]) -> Result<Product, AppError> {
        get_json_with_headers(&product_path(id), headers).await
    }

    pub async fn create_product(
        input: &ProductInput,
        headers: &[(String, String)],
    ) -> Result<Product, AppError> {
        post_json_response("/api/products", input, headers).await
    }

    pub async fn update_product(
        id: &str,
        input: &ProductInput,
        headers: &[(String, String)],
    ) -> Result<Product, AppError> {
        put_json_response(&product_path(id), input, headers).await
    }

    pub async fn delete_product(id: &str, headers: &[(String, String)]) -> Result<(), AppError> {
        delete_with_headers(&product_path(id), headers).await
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn product_path_trims_id() {
        assert_eq!(super::product_path(" abc "), "/api/products/abc");
    }
}
