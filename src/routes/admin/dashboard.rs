use crate::app_lib::theme::Theme;
use crate::features::auth::state::use_auth;
use crate::features::blog::client::list_all;
use crate::features::products::client::list_products;
use crate::routes::admin::admin_error;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let posts = LocalResource::new(move || {
        let headers = auth.admin_headers();
        async move { list_all(&headers).await }
    });
    let products = LocalResource::new(list_products);

    let post_stats = move || {
        posts.get().map(|result| match result {
            Ok(posts) => {
                let published = posts.iter().filter(|post| post.published).count();
                format!("{} posts, {} published", posts.len(), published)
            }
            Err(err) => admin_error(auth, &err),
        })
    };
    let product_stats = move || {
        products.get().map(|result| match result {
            Ok(products) => {
                let active = products.iter().filter(|product| product.active).count();
                format!("{} products, {} active", products.len(), active)
            }
            Err(err) => admin_error(auth, &err),
        })
    };

    view! {
        <div class="space-y-6">
            <h1 class=Theme::HEADING>"Dashboard"</h1>
            <div class="grid gap-6 md:grid-cols-3">
                <div class=Theme::CARD>
                    <p class="text-sm text-gray-500 dark:text-gray-400">"Blog"</p>
                    <p class="mt-2 text-lg text-gray-900 dark:text-white">
                        {move || post_stats().unwrap_or_else(|| "Loading...".to_string())}
                    </p>
                    <A href="/admin/blogs/new" {..} class=Theme::LINK>"Write a post"</A>
                </div>
                <div class=Theme::CARD>
                    <p class="text-sm text-gray-500 dark:text-gray-400">"Products"</p>
                    <p class="mt-2 text-lg text-gray-900 dark:text-white">
                        {move || product_stats().unwrap_or_else(|| "Loading...".to_string())}
                    </p>
                    <A href="/admin/products/new" {..} class=Theme::LINK>"Add a product"</A>
                </div>
                <div class=Theme::CARD>
                    <p class="text-sm text-gray-500 dark:text-gray-400">"Site"</p>
                    <p class="mt-2 text-lg text-gray-900 dark:text-white">"Branding, contact, payments"</p>
                    <A href="/admin/settings" {..} class=Theme::LINK>"Edit settings"</A>
                </div>
            </div>
        </div>
    }
}
