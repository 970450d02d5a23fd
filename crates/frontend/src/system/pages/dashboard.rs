use contracts::dashboards::d400_admin_statistics::dto::AdminStatistics;
use contracts::domain::a001_supplier::aggregate::{Supplier, SupplierStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::use_services;
use crate::dashboards::d400_admin_statistics::api::get_statistics;
use crate::domain::a001_supplier::api::{approve_supplier, list_suppliers, reject_supplier};
use crate::system::auth::context::{do_logout, report_api_error, use_auth};

/// Landing page: supplier counters and the onboarding queue
#[component]
pub fn DashboardPage() -> impl IntoView {
    let services = use_services();
    let (auth_state, set_auth_state) = use_auth();

    let (stats, set_stats) = signal(AdminStatistics::default());
    let (suppliers, set_suppliers) = signal(Vec::<Supplier>::new());
    let (status_filter, set_status_filter) = signal(Some(SupplierStatus::Pending));
    let (notice, set_notice) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let load = {
        let services = services.clone();
        move || {
            let services = services.clone();
            let token = auth_state.get_untracked().token().to_string();
            let status = status_filter.get_untracked();
            set_is_loading.set(true);

            spawn_local(async move {
                // the two calls are independent, a failure of one keeps the other
                match get_statistics(&services.api, &token).await {
                    Ok(data) => set_stats.set(data),
                    Err(e) => {
                        log::error!("Failed to fetch statistics: {}", e);
                        set_notice.set(report_api_error(&e, &services, set_auth_state));
                    }
                }
                match list_suppliers(&services.api, &token, status).await {
                    Ok(items) => set_suppliers.set(items),
                    Err(e) => {
                        log::error!("Failed to fetch suppliers: {}", e);
                        set_notice.set(report_api_error(&e, &services, set_auth_state));
                    }
                }
                set_is_loading.set(false);
            });
        }
    };

    load();

    let on_filter = {
        let load = load.clone();
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            let status = SupplierStatus::all()
                .into_iter()
                .find(|s| s.code() == value);
            set_status_filter.set(status);
            load();
        }
    };

    let on_moderated = Callback::new({
        let load = load.clone();
        move |message: Option<String>| {
            set_notice.set(message);
            load();
        }
    });

    let on_logout = {
        let services = services.clone();
        move |_: leptos::ev::MouseEvent| do_logout(&services, set_auth_state)
    };

    let admin_name = move || {
        auth_state
            .get()
            .user
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Admin Dashboard"</h1>
                <span class="admin-name">{admin_name}</span>
                <button class="btn-secondary" on:click=on_logout>"Logout"</button>
            </header>

            <Show when=move || notice.get().is_some()>
                <div class="notice">
                    {move || notice.get().unwrap_or_default()}
                    <button on:click=move |_| set_notice.set(None)>"×"</button>
                </div>
            </Show>

            <section class="stats">
                <div class="stat">"Pending: " {move || stats.get().pending}</div>
                <div class="stat">"Approved: " {move || stats.get().approved}</div>
                <div class="stat">"Rejected: " {move || stats.get().rejected}</div>
                <div class="stat">"Total: " {move || stats.get().total}</div>
            </section>

            <section class="suppliers">
                <select on:change=on_filter>
                    <option value="all">"All"</option>
                    <option value="pending" selected>"Pending"</option>
                    <option value="approved">"Approved"</option>
                    <option value="rejected">"Rejected"</option>
                </select>

                <Show when=move || is_loading.get()>
                    <div class="loading">"Loading..."</div>
                </Show>

                <For
                    each=move || suppliers.get()
                    key=|supplier| supplier.id.clone()
                    let:supplier
                >
                    <SupplierRow supplier=supplier on_moderated=on_moderated />
                </For>
            </section>
        </div>
    }
}

#[component]
fn SupplierRow(supplier: Supplier, on_moderated: Callback<Option<String>>) -> impl IntoView {
    let services = use_services();
    let (auth_state, set_auth_state) = use_auth();
    let (reason, set_reason) = signal(String::new());

    let documents = supplier
        .documents
        .uploaded()
        .into_iter()
        .map(|(label, doc)| {
            let href = services.assets.resolve(Some(&doc.file_url));
            view! {
                <a class="document-link" href=href target="_blank">{label}</a>
            }
        })
        .collect_view();

    let on_approve = {
        let services = services.clone();
        let id = supplier.id.clone();
        move |_: leptos::ev::MouseEvent| {
            let services = services.clone();
            let id = id.clone();
            let token = auth_state.get_untracked().token().to_string();
            spawn_local(async move {
                let message = match approve_supplier(&services.api, &token, &id).await {
                    Ok(response) if response.email_failed() => {
                        Some("Supplier approved, but the notification email failed".to_string())
                    }
                    Ok(_) => None,
                    Err(e) => report_api_error(&e, &services, set_auth_state),
                };
                on_moderated.run(message);
            });
        }
    };

    let on_reject = {
        let services = services.clone();
        let id = supplier.id.clone();
        move |_: leptos::ev::MouseEvent| {
            let services = services.clone();
            let id = id.clone();
            let token = auth_state.get_untracked().token().to_string();
            let reason_val = reason.get_untracked();
            spawn_local(async move {
                let message = match reject_supplier(&services.api, &token, &id, &reason_val).await {
                    Ok(response) if response.email_failed() => {
                        Some("Supplier rejected, but the notification email failed".to_string())
                    }
                    Ok(_) => None,
                    Err(e) => report_api_error(&e, &services, set_auth_state),
                };
                on_moderated.run(message);
            });
        }
    };

    let is_pending = supplier.status == SupplierStatus::Pending;

    view! {
        <div class="supplier-row">
            <div class="supplier-name">{supplier.company_name.clone()}</div>
            <div class="supplier-email">{supplier.email.clone()}</div>
            <div class="supplier-status">{supplier.status.code()}</div>
            <div class="supplier-documents">{documents}</div>
            <Show when=move || is_pending>
                <input
                    type="text"
                    placeholder="Rejection reason"
                    on:input=move |ev| set_reason.set(event_target_value(&ev))
                />
                <button class="btn-primary" on:click=on_approve.clone()>"Approve"</button>
                <button class="btn-danger" on:click=on_reject.clone()>"Reject"</button>
            </Show>
        </div>
    }
}
