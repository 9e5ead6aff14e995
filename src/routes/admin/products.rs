use crate::app_lib::theme::Theme;
use crate::components::{Alert, AlertKind, Button, FieldError, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::forms::FieldErrors;
use crate::features::products::client::{
    create_product, delete_product, get_product, list_products, update_product,
};
use crate::features::products::types::{ProductDraft, ProductInput, validate_draft};
use crate::routes::admin::{admin_error, confirm, editing_id};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
pub fn ProductListPage() -> impl IntoView {
    let auth = use_auth();
    let (error, set_error) = signal::<Option<String>>(None);
    let products = LocalResource::new(list_products);

    let remove = move |id: String, name: String| {
        if !confirm(&format!("Delete \"{name}\"?")) {
            return;
        }
        spawn_local(async move {
            match delete_product(&id, &auth.admin_headers()).await {
                Ok(()) => products.refetch(),
                Err(err) => set_error.set(Some(admin_error(auth, &err))),
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class=Theme::HEADING>"Products"</h1>
                <A href="/admin/products/new" {..} class=Theme::LINK>"New product"</A>
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
                    products
                        .get()
                        .map(|result| match result {
                            Ok(products) => {
                                view! {
                                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                                        <thead>
                                            <tr>
                                                <th class=Theme::TH>"Name"</th>
                                                <th class=Theme::TH>"Price"</th>
                                                <th class=Theme::TH>"Status"</th>
                                                <th class=Theme::TH></th>
                                            </tr>
                                        </thead>
                                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                                            {products
                                                .into_iter()
                                                .map(|product| {
                                                    let edit = format!("/admin/products/{}", product.id);
                                                    let price = product.display_price();
                                                    let id = product.id.clone();
                                                    let name = product.name.clone();
                                                    view! {
                                                        <tr>
                                                            <td class=Theme::ROW>
                                                                <A href=edit {..} class=Theme::LINK>
                                                                    {product.name.clone()}
                                                                </A>
                                                            </td>
                                                            <td class=Theme::ROW>{price}</td>
                                                            <td class=Theme::ROW>
                                                                {if product.active { "Active" } else { "Hidden" }}
                                                            </td>
                                                            <td class=Theme::ROW>
                                                                <button
                                                                    type="button"
                                                                    class="text-red-600 hover:text-red-800 dark:text-red-400"
                                                                    on:click=move |_| remove(id.clone(), name.clone())
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
                                view! { <Alert kind=AlertKind::Error message=err.user_message() /> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
pub fn ProductEditorPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let params = use_params_map();
    let id = editing_id(params.with_untracked(|params| params.get("id")));
    let draft = RwSignal::new(ProductDraft::default());
    let (field_errors, set_field_errors) = signal(FieldErrors::new());
    let (error, set_error) = signal::<Option<String>>(None);

    if let Some(id) = id.clone() {
        spawn_local(async move {
            match get_product(&id, &auth.admin_headers()).await {
                Ok(product) => draft.set(ProductDraft::from_product(&product)),
                Err(err) => set_error.set(Some(admin_error(auth, &err))),
            }
        });
    }

    let save_action = Action::new_local(move |input: &ProductInput| {
        let input = input.clone();
        let id = id.clone();
        let headers = auth.admin_headers();
        async move {
            match id {
                Some(id) => update_product(&id, &input, &headers).await,
                None => create_product(&input, &headers).await,
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(_) => navigate("/admin/products", Default::default()),
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

    view! {
        <form class="max-w-3xl space-y-5" on:submit=on_submit novalidate>
            <h1 class=Theme::HEADING>"Edit product"</h1>
            <div>
                <label class=Theme::LABEL for="name">"Name"</label>
                <input
                    id="name"
                    class=Theme::INPUT
                    prop:value=move || draft.with(|draft| draft.name.clone())
                    on:input=move |event| draft.update(|draft| draft.name = event_target_value(&event))
                />
                <FieldError errors=field_errors field="name" />
            </div>
            <div>
                <label class=Theme::LABEL for="description">"Description"</label>
                <textarea
                    id="description"
                    rows="4"
                    class=Theme::INPUT
                    prop:value=move || draft.with(|draft| draft.description.clone())
                    on:input=move |event| {
                        draft.update(|draft| draft.description = event_target_value(&event))
                    }
                ></textarea>
            </div>
            <div class="grid gap-4 md:grid-cols-2">
                <div>
                    <label class=Theme::LABEL for="price">"Price"</label>
                    <input
                        id="price"
                        inputmode="decimal"
                        class=Theme::INPUT
                        placeholder="499.00"
                        prop:value=move || draft.with(|draft| draft.price.clone())
                        on:input=move |event| draft.update(|draft| draft.price = event_target_value(&event))
                    />
                    <FieldError errors=field_errors field="price" />
                </div>
                <div>
                    <label class=Theme::LABEL for="currency">"Currency"</label>
                    <input
                        id="currency"
                        maxlength="3"
                        class=Theme::INPUT
                        prop:value=move || draft.with(|draft| draft.currency.clone())
                        on:input=move |event| {
                            draft.update(|draft| draft.currency = event_target_value(&event))
                        }
                    />
                    <FieldError errors=field_errors field="currency" />
                </div>
            </div>
            <div>
                <label class=Theme::LABEL for="category">"Category"</label>
                <input
                    id="category"
                    class=Theme::INPUT
                    prop:value=move || draft.with(|draft| draft.category.clone())
                    on:input=move |event| draft.update(|draft| draft.category = event_target_value(&event))
                />
            </div>
            <div>
                <label class=Theme::LABEL for="image_url">"Image URL"</label>
                <input
                    id="image_url"
                    class=Theme::INPUT
                    prop:value=move || draft.with(|draft| draft.image_url.clone())
                    on:input=move |event| {
                        draft.update(|draft| draft.image_url = event_target_value(&event))
                    }
                />
                <FieldError errors=field_errors field="image_url" />
            </div>
            <div>
                <label class=Theme::LABEL for="features">"Features, one per line"</label>
                <textarea
                    id="features"
                    rows="5"
                    class=Theme::INPUT
                    prop:value=move || draft.with(|draft| draft.features.clone())
                    on:input=move |event| draft.update(|draft| draft.features = event_target_value(&event))
                ></textarea>
            </div>
            <label class="flex items-center gap-2 text-sm text-gray-700 dark:text-gray-300">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|draft| draft.active)
                    on:change=move |event| draft.update(|draft| draft.active = event_target_checked(&event))
                />
                "Listed on the services page"
            </label>
            <div class="flex items-center gap-4">
                <Button button_type="submit" disabled=save_action.pending()>
                    "Save"
                </Button>
                <A href="/admin/products" {..} class=Theme::LINK>"Cancel"</A>
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
