use crate::system::auth::guard::RequireAuth;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

// Single-view console: the auth phase decides between login and dashboard.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RequireAuth fallback=|| view! { <LoginPage /> }>
            <DashboardPage />
        </RequireAuth>
    }
}
