use leptos::prelude::*;

use super::context::use_auth;

/// Renders `children` only for an authenticated session, `fallback` otherwise
#[component]
pub fn RequireAuth(
    #[prop(optional, into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=fallback
        >
            {children()}
        </Show>
    }
}
