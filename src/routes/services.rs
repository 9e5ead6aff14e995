use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::products::client::list_products;
use leptos::prelude::*;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let products = LocalResource::new(list_products);

    view! {
        <AppShell>
            <div class="space-y-8">
                <h1 class=Theme::HEADING>"Services"</h1>
                <Suspense fallback=|| view! { <Spinner /> }>
                    {move || {
                        products
                            .get()
                            .map(|result| match result {
                                Ok(products) => {
                                    let active: Vec<_> = products
                                        .into_iter()
                                        .filter(|product| product.active)
                                        .collect();
                                    if active.is_empty() {
                                        view! {
                                            <p class="text-gray-500 dark:text-gray-400">
                                                "No services listed yet."
                                            </p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                                                {active
                                                    .into_iter()
                                                    .map(|product| {
                                                        let price = product.display_price();
                                                        view! {
                                                            <article class=Theme::CARD>
                                                                {product
                                                                    .image_url
                                                                    .clone()
                                                                    .map(|src| {
                                                                        view! {
                                                                            <img src=src alt="" class="mb-4 h-40 w-full rounded object-cover" />
                                                                        }
                                                                    })}
                                                                <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                                                                    {product.name.clone()}
                                                                </h2>
                                                                <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                                                                    {product.description.clone().unwrap_or_default()}
                                                                </p>
                                                                <ul class="mt-3 list-disc pl-5 text-sm text-gray-600 dark:text-gray-300">
                                                                    {product
                                                                        .features
                                                                        .iter()
                                                                        .map(|feature| view! { <li>{feature.clone()}</li> })
                                                                        .collect_view()}
                                                                </ul>
                                                                <p class="mt-4 font-semibold text-gray-900 dark:text-white">
                                                                    {price}
                                                                </p>
                                                            </article>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }
                                Err(err) => {
                                    view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </AppShell>
    }
}
