use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, FieldError, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::blog::client::{create_post, delete_post, get_post, list_all, update_post};
use crate::features::blog::types::{BlogDraft, BlogPostInput, slugify, validate_draft};
use crate::features::forms::FieldErrors;
use crate::routes::admin::{admin_error, confirm, editing_id};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
pub fn BlogListPage() -> impl IntoView {
    let auth = use_auth();
    let (error, set_error) = signal::<Option<String>>(None);
    let posts = LocalResource::new(move || {
        let headers = auth.admin_headers();
        async move { list_all(&headers).await }
    });

    let remove = move |id: String, title: String| {
        if !confirm(&format!("Delete \"{title}\"?")) {
            return;
        }
        spawn_local(async move {
            match delete_post(&id, &auth.admin_headers()).await {
                Ok(()) => posts.refetch(),
                Err(err) => set_error.set(Some(admin_error(auth, &err))),
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class=Theme::HEADING>"Blog posts"</h1>
                <A href="/admin/blogs/new" {..} class=Theme::LINK>"New post"</A>
            </div>
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <Alert
                                kind=AlertKind::Error
                                message=message
                                on_dismiss=move |()| set_error.set(None)
                            />
                        }
                    })
            }}
            <Suspense fallback=|| view! { <Spinner /> }>
                {move || {
                    posts
                        .get()
                        .map(|result| match result {
                            Ok(posts) => {
                                view! {
                                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                                        <thead>
                                            <tr>
                                                <th class=Theme::TH>"Title"</th>
                                                <th class=Theme::TH>"Status"</th>
                                                <th class=Theme::TH>"Updated"</th>
                                                <th class=Theme::TH></th>
                                            </tr>
                                        </thead>
                                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                            {posts
                                                .into_iter()
                                                .map(|post| {
                                                    let edit = format!("/admin/blogs/{}", post.id);
                                                    let id = post.id.clone();
                                                    let title = post.title.clone();
                                                    view! {
                                                        <tr>
                                                            <td class=Theme::ROW>
                                                                <A href=edit {..} class=Theme::LINK>
                                                                    {post.title.clone()}
                                                                </A>
                                                            </td>
                                                            <td class=Theme::ROW>
                                                                {if post.published { "Published" } else { "Draft" }}
                                                            </td>
                                                            <td class=Theme::ROW>
                                                                {post.updated_at.clone().unwrap_or_default()}
                                                            </td>
                                                            <td class=Theme::ROW>
                                                                <button
                                                                    type="button"
                                                                    class="text-red-600 hover:text-red-800 dark:text-red-400"
                                                                    on:click=move |_| remove(id.clone(), title.clone())
                                                                >
                                                                    "Delete"
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <Alert kind=AlertKind::Error message=admin_error(auth, &err) /> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
pub fn BlogEditorPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let params = use_params_map();
    let id = editing_id(params.with_untracked(|params| params.get("id")));
    let draft = RwSignal::new(BlogDraft::default());
    let (field_errors, set_field_errors) = signal(FieldErrors::new());
    let (error, set_error) = signal::<Option<String>>(None);

    if let Some(id) = id.clone() {
        spawn_local(async move {
            match get_post(&id, &auth.admin_headers()).await {
                Ok(post) => draft.set(BlogDraft::from_post(&post)),
                Err(err) => set_error.set(Some(admin_error(auth, &err))),
            }
        });
    }

    let save_action = Action::new_local(move |input: &BlogPostInput| {
        let input = input.clone();
        let id = id.clone();
        let headers = auth.admin_headers();
        async move {
            match id {
                Some(id) => update_post(&id, &input, &headers).await,
                None => create_post(&input, &headers).await,
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => navigate("/admin/blogs", Default::default()),
                Err(err) => set_error.set(Some(admin_error(auth, &err))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        match draft.with_untracked(validate_draft) {
            Ok(input) => {
                set_field_errors.set(FieldErrors::new());
                save_action.dispatch(input);
            }
            Err(errors) => set_field_errors.set(errors),
        }
    };

    let slug_preview = move || {
        draft.with(|draft| {
            let source = if draft.slug.trim().is_empty() { &draft.title } else { &draft.slug };
            format!("/blog/{}", slugify(source))
        })
    };

    view! {
        <form class="max-w-3xl space-y-5" on:submit=on_submit novalidate>
            <h1 class=Theme::HEADING>"Edit post"</h1>
            <div>
                <label class=Theme::LABEL for="title">"Title"</label>
                <input
                    id="title"
                    class=Theme::INPUT
                    prop:value=move || draft.with(|draft| draft.title.clone())
                    on:input=move |event| draft.update(|draft| draft.title = event_target_value(&event))
                />
                <FieldError errors=field_errors field="title" />
            </div>
            <div>
                <label class=Theme::LABEL for="slug">"Slug"</label>
                <input
                    id="slug"
                    class=Theme::INPUT
                    placeholder="Derived from the title when empty"
                    prop:value=move || draft.with(|draft| draft.slug.clone())
                    on:input=move |event| draft.update(|draft| draft.slug = event_target_value(&event))
                />
                <p class="mt-1 text-xs text-gray-500 dark:text-gray-400">{slug_preview}</p>
                <FieldError errors=field_errors field="slug" />
            </div>
            <div>
                <label class=Theme::LABEL for="excerpt">"Excerpt"</label>
                <input
                    id="excerpt"
                    class=Theme::INPUT
                    prop:value=move || draft.with(|draft| draft.excerpt.clone())
                    on:input=move |event| draft.update(|draft| draft.excerpt = event_target_value(&event))
                />
            </div>
            <div>
                <label class=Theme::LABEL for="content">"Content"</label>
                <textarea
                    id="content"
                    rows="14"
                    class=Theme::INPUT
                    prop:value=move || draft.with(|draft| draft.content.clone())
                    on:input=move |event| draft.update(|draft| draft.content = event_target_value(&event))
                ></textarea>
                <FieldError errors=field_errors field="content" />
            </div>
            <div>
                <label class=Theme::LABEL for="cover_image">"Cover image URL"</label>
                <input
                    id="cover_image"
                    class=Theme::INPUT
                    prop:value=move || draft.with(|draft| draft.cover_image.clone())
                    on:input=move |event| {
                        draft.update(|draft| draft.cover_image = event_target_value(&event))
                    }
                />
                <FieldError errors=field_errors field="cover_image" />
            </div>
            <div>
                <label class=Theme::LABEL for="tags">"Tags"</label>
                <input
                    id="tags"
                    class=Theme::INPUT
                    placeholder="rust, wasm, design"
                    prop:value=move || draft.with(|draft| draft.tags.clone())
                    on:input=move |event| draft.update(|draft| draft.tags = event_target_value(&event))
                />
            </div>
            <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|draft| draft.published)
                    on:change=move |event| draft.update(|draft| draft.published = event_target_checked(&event))
                />
                "Published"
            </label>
            <div class="flex items-center gap-4">
                <Button button_type="submit" disabled=save_action.pending()>
                    "Save"
                </Button>
                <A href="/admin/blogs" {..} class=Theme::LINK>"Cancel"</A>
            </div>
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <Alert
                                kind=AlertKind::Error
                                message=message
                                on_dismiss=move |()| set_error.set(None)
                            />
                        }
                    })
            }}
        </form>
    }
}
