use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::blog::client::{get_by_slug, list_published};
use crate::routes::not_found::NotFoundContent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

#[component]
pub fn BlogListPage() -> impl IntoView {
    let posts = LocalResource::new(list_published);

    view! {
        <AppShell>
            <div class="mx-auto max-w-3xl space-y-8">
                <h1 class=Theme::HEADING>"Blog"</h1>
                <Suspense fallback=|| view! { <Spinner /> }>
                    {move || {
                        posts
                            .get()
                            .map(|result| match result {
                                Ok(posts) if posts.is_empty() => {
                                    view! {
                                        <p class="text-gray-500 dark:text-gray-400">"Nothing published yet."</p>
                                    }
                                        .into_any()
                                }
                                Ok(posts) => {
                                    posts
                                        .into_iter()
                                        .map(|post| {
                                            let href = format!("/blog/{}", post.slug);
                                            view! {
                                                <article class="border-b border-gray-200 pb-6 dark:border-gray-700">
                                                    <A href=href {..} class="text-xl font-semibold text-gray-900 hover:underline dark:text-white">
                                                        {post.title.clone()}
                                                    </A>
                                                    <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">
                                                        {post.created_at.clone().unwrap_or_default()}
                                                    </p>
                                                    <p class="mt-2 text-gray-600 dark:text-gray-300">
                                                        {post.excerpt.clone().unwrap_or_default()}
                                                    </p>
                                                </article>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
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

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let post = LocalResource::new(move || {
        let slug = params.with(|params| params.get("slug")).unwrap_or_default();
        async move { get_by_slug(&slug).await }
    });

    view! {
        <AppShell>
            <div class="mx-auto max-w-3xl">
                <Suspense fallback=|| view! { <Spinner /> }>
                    {move || {
                        post.get()
                            .map(|result| match result {
                                Ok(post) if post.published => {
                                    view! {
                                        <article class="space-y-6">
                                            {post
                                                .cover_image
                                                .clone()
                                                .map(|src| view! { <img src=src alt="" class="w-full rounded-lg" /> })}
                                            <h1 class="text-3xl font-bold text-gray-900 dark:text-white">
                                                {post.title.clone()}
                                            </h1>
                                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                                {post.author.clone().unwrap_or_default()}
                                            </p>
                                            <div class="whitespace-pre-line text-gray-700 dark:text-gray-200">
                                                {post.content.clone()}
                                            </div>
                                            <div class="flex flex-wrap gap-2">
                                                {post
                                                    .tags
                                                    .iter()
                                                    .map(|tag| {
                                                        view! {
                                                            <span class="rounded bg-gray-100 px-2 py-1 text-xs dark:bg-gray-800 dark:text-gray-300">
                                                                {tag.clone()}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </article>
                                    }
                                        .into_any()
                                }
                                Ok(_) => view! { <NotFoundContent /> }.into_any(),
                                Err(err) if err.status() == Some(404) => {
                                    view! { <NotFoundContent /> }.into_any()
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
