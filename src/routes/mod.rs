//! Route table. Public pages render inside `AppShell`; the admin subtree is
//! nested under `AdminLayout`, which requires an admin session. Admin sign-in
//! and recovery pages sit outside it.

mod admin;
mod auth;
mod blog;
mod contact;
mod health;
mod home;
mod legal;
mod not_found;
mod services;

use admin::{
    AdminBlogListPage, BlogEditorPage, DashboardPage, ProductEditorPage, ProductListPage,
    SettingsPage,
};
use auth::{
    ForgotPasswordPage, LoginPage, OAuthCallbackPage, RegisterPage, ResetPasswordPage,
    VerifyEmailPage,
};
use blog::{BlogListPage, BlogPostPage};
use contact::ContactPage;
use health::HealthPage;
use home::HomePage;
use legal::{PrivacyPage, TermsPage};
use not_found::NotFoundPage;
use services::ServicesPage;

use crate::components::AdminLayout;
use crate::features::auth::client::AccountScope;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/services") view=ServicesPage />
            <Route path=path!("/blog") view=BlogListPage />
            <Route path=path!("/blog/:slug") view=BlogPostPage />
            <Route path=path!("/contact") view=ContactPage />
            <Route path=path!("/privacy") view=PrivacyPage />
            <Route path=path!("/terms") view=TermsPage />
            <Route path=path!("/health") view=HealthPage />

            <Route path=path!("/login") view=|| view! { <LoginPage scope=AccountScope::User /> } />
            <Route path=path!("/register") view=RegisterPage />
            <Route
                path=path!("/forgot-password")
                view=|| view! { <ForgotPasswordPage scope=AccountScope::User /> }
            />
            <Route
                path=path!("/reset-password")
                view=|| view! { <ResetPasswordPage scope=AccountScope::User /> }
            />
            <Route path=path!("/verify-email") view=VerifyEmailPage />
            <Route path=path!("/oauth/callback") view=OAuthCallbackPage />

            <Route
                path=path!("/admin/login")
                view=|| view! { <LoginPage scope=AccountScope::Admin /> }
            />
            <Route
                path=path!("/admin/forgot-password")
                view=|| view! { <ForgotPasswordPage scope=AccountScope::Admin /> }
            />
            <Route
                path=path!("/admin/reset-password")
                view=|| view! { <ResetPasswordPage scope=AccountScope::Admin /> }
            />
            <ParentRoute path=path!("/admin") view=AdminLayout>
                <Route path=path!("") view=DashboardPage />
                <Route path=path!("/blogs") view=AdminBlogListPage />
                <Route path=path!("/blogs/:id") view=BlogEditorPage />
                <Route path=path!("/products") view=ProductListPage />
                <Route path=path!("/products/:id") view=ProductEditorPage />
                <Route path=path!("/settings") view=SettingsPage />
            </ParentRoute>

            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
