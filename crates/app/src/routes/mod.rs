pub mod business;
pub mod government;
pub mod home;
pub mod login;
pub mod not_found;
pub mod provider;

use crate::auth::use_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdBuilding, LdClipboardList, LdFileText, LdLayoutDashboard, LdLogOut, LdMap,
    LdPackage, LdRecycle, LdSettings, LdShield, LdTruck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::access::{self, GuardDecision};
use shared_types::{FeatureFlags, Role};

use business::{
    BusinessDashboard, BusinessPickupDetail, BusinessPickups, BusinessReports,
    BusinessRequestPickup, BusinessSettings, BusinessWasteProfile,
};
use government::{
    GovernmentAnalytics, GovernmentBusinesses, GovernmentCompliance, GovernmentDashboard,
    GovernmentProviders, GovernmentReports, GovernmentSettings,
};
use home::Home;
use login::Login;
use not_found::NotFound;
use provider::{
    ProviderCompliance, ProviderCustomers, ProviderDashboard, ProviderFleet,
    ProviderPickupRequests, ProviderReports, ProviderSettings, ProviderTracking,
};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AuthGuard)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[layout(AppLayout)]
    // ── Business ──
    #[route("/business/dashboard")]
    BusinessDashboard {},
    #[route("/business/pickups")]
    BusinessPickups {},
    #[route("/business/pickups/:id")]
    BusinessPickupDetail { id: String },
    #[route("/business/request-pickup")]
    BusinessRequestPickup {},
    #[route("/business/waste-profile")]
    BusinessWasteProfile {},
    #[route("/business/reports")]
    BusinessReports {},
    #[route("/business/settings")]
    BusinessSettings {},
    // ── Provider ──
    #[route("/provider/dashboard")]
    ProviderDashboard {},
    #[route("/provider/pickup-requests")]
    ProviderPickupRequests {},
    #[route("/provider/tracking")]
    ProviderTracking {},
    #[route("/provider/fleet")]
    ProviderFleet {},
    #[route("/provider/customers")]
    ProviderCustomers {},
    #[route("/provider/compliance")]
    ProviderCompliance {},
    #[route("/provider/reports")]
    ProviderReports {},
    #[route("/provider/settings")]
    ProviderSettings {},
    // ── Government ──
    #[route("/government/dashboard")]
    GovernmentDashboard {},
    #[route("/government/businesses")]
    GovernmentBusinesses {},
    #[route("/government/providers")]
    GovernmentProviders {},
    #[route("/government/compliance")]
    GovernmentCompliance {},
    #[route("/government/analytics")]
    GovernmentAnalytics {},
    #[route("/government/reports")]
    GovernmentReports {},
    #[route("/government/settings")]
    GovernmentSettings {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Gatekeeper for every page except 404.
///
/// The session is hydrated from the cookie through `use_server_future`, so
/// during SSR the guard suspends until the lookup completes. Once settled the
/// decision is a pure function of the session and the current path.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();
    let route: Route = use_route();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    match resource.read().as_ref().cloned() {
        Some(Ok(record)) => auth.hydrate(record),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "session lookup failed; treating as signed out");
            auth.hydrate(None);
        }
        None => {}
    }

    let decision = access::evaluate(&auth.session.read(), &route.to_string());

    match decision {
        GuardDecision::Placeholder => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
        GuardDecision::Redirect(path) => {
            match path.parse::<Route>() {
                Ok(target) => {
                    navigator().replace(target);
                }
                Err(_) => tracing::error!(path, "redirect target is not a known route"),
            }
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
        GuardDecision::Render => rsx! { Outlet::<Route> {} },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavIcon {
    Dashboard,
    Pickups,
    Request,
    Waste,
    Fleet,
    Routes,
    Customers,
    Compliance,
    Registry,
    Analytics,
    Reports,
    Settings,
}

/// Sidebar entries for a role, in display order.
fn nav_items(role: Role) -> Vec<(Route, &'static str, NavIcon)> {
    match role {
        Role::Business => vec![
            (Route::BusinessDashboard {}, "Dashboard", NavIcon::Dashboard),
            (Route::BusinessPickups {}, "My Pickups", NavIcon::Pickups),
            (Route::BusinessRequestPickup {}, "Request Pickup", NavIcon::Request),
            (Route::BusinessWasteProfile {}, "Waste Profile", NavIcon::Waste),
            (Route::BusinessReports {}, "Reports", NavIcon::Reports),
            (Route::BusinessSettings {}, "Settings", NavIcon::Settings),
        ],
        Role::Provider => vec![
            (Route::ProviderDashboard {}, "Dashboard", NavIcon::Dashboard),
            (Route::ProviderPickupRequests {}, "Pickup Requests", NavIcon::Pickups),
            (Route::ProviderTracking {}, "Routes & Tracking", NavIcon::Routes),
            (Route::ProviderFleet {}, "Fleet", NavIcon::Fleet),
            (Route::ProviderCustomers {}, "Customers", NavIcon::Customers),
            (Route::ProviderCompliance {}, "Compliance", NavIcon::Compliance),
            (Route::ProviderReports {}, "Reports", NavIcon::Reports),
            (Route::ProviderSettings {}, "Settings", NavIcon::Settings),
        ],
        Role::Government => vec![
            (Route::GovernmentDashboard {}, "Dashboard", NavIcon::Dashboard),
            (Route::GovernmentBusinesses {}, "Businesses", NavIcon::Registry),
            (Route::GovernmentProviders {}, "Providers", NavIcon::Fleet),
            (Route::GovernmentCompliance {}, "Compliance", NavIcon::Compliance),
            (Route::GovernmentAnalytics {}, "Analytics", NavIcon::Analytics),
            (Route::GovernmentReports {}, "Reports", NavIcon::Reports),
            (Route::GovernmentSettings {}, "Settings", NavIcon::Settings),
        ],
    }
}

/// Whether `item` should be highlighted while `current` is shown.
fn is_active(item: &Route, current: &Route) -> bool {
    match (item, current) {
        (Route::BusinessPickups {}, Route::BusinessPickupDetail { .. }) => true,
        _ => item == current,
    }
}

fn page_title(route: &Route) -> &'static str {
    match route {
        Route::BusinessDashboard {} | Route::ProviderDashboard {} | Route::GovernmentDashboard {} => {
            "Dashboard"
        }
        Route::BusinessPickups {} => "My Pickups",
        Route::BusinessPickupDetail { .. } => "Pickup Details",
        Route::BusinessRequestPickup {} => "Request Pickup",
        Route::BusinessWasteProfile {} => "Waste Profile",
        Route::ProviderPickupRequests {} => "Pickup Requests",
        Route::ProviderTracking {} => "Routes & Tracking",
        Route::ProviderFleet {} => "Fleet Management",
        Route::ProviderCustomers {} => "Customers",
        Route::ProviderCompliance {} | Route::GovernmentCompliance {} => "Compliance",
        Route::GovernmentBusinesses {} => "Businesses",
        Route::GovernmentProviders {} => "Waste Providers",
        Route::GovernmentAnalytics {} => "Analytics",
        Route::BusinessReports {} | Route::ProviderReports {} | Route::GovernmentReports {} => {
            "Reports"
        }
        Route::BusinessSettings {} | Route::ProviderSettings {} | Route::GovernmentSettings {} => {
            "Settings"
        }
        Route::Home {} | Route::Login {} | Route::NotFound { .. } => "",
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::Pickups => rsx! { Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 } },
        NavIcon::Request => rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 } },
        NavIcon::Waste => rsx! { Icon::<LdRecycle> { icon: LdRecycle, width: 18, height: 18 } },
        NavIcon::Fleet => rsx! { Icon::<LdTruck> { icon: LdTruck, width: 18, height: 18 } },
        NavIcon::Routes => rsx! { Icon::<LdMap> { icon: LdMap, width: 18, height: 18 } },
        NavIcon::Customers => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Compliance => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
        NavIcon::Registry => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 18, height: 18 } },
        NavIcon::Analytics => rsx! { Icon::<LdActivity> { icon: LdActivity, width: 18, height: 18 } },
        NavIcon::Reports => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        NavIcon::Settings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}

/// Role-aware shell with sidebar navigation and a top bar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let flags: FeatureFlags = use_context();
    let auth = use_auth();

    // The guard only renders this layout for an active session.
    let Some(user) = auth.user() else {
        return rsx! {};
    };

    let title = page_title(&route);
    let items = nav_items(user.role);

    let handle_logout = move |_| async move {
        auth.logout().await;
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            aside { class: "sidebar",
                div { class: "sidebar-brand",
                    Icon::<LdRecycle> { icon: LdRecycle, width: 22, height: 22 }
                    span { class: "sidebar-brand-name", "WasteTrack" }
                }
                span { class: "sidebar-role", "{user.role.label()} Portal" }

                nav { class: "sidebar-menu",
                    for (target, label, icon) in items {
                        Link {
                            class: if is_active(&target, &route) { "sidebar-link active" } else { "sidebar-link" },
                            to: target.clone(),
                            NavGlyph { icon }
                            "{label}"
                        }
                    }
                }

                div { class: "sidebar-footer",
                    span { class: "sidebar-user", "{user.email}" }
                    button { class: "sidebar-link logout", onclick: handle_logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                        "Sign Out"
                    }
                }
            }

            div { class: "app-main",
                header { class: "topbar",
                    h1 { class: "topbar-title", "{title}" }
                    span { class: "topbar-user", "{user.email}" }
                }
                if !flags.persist_mutations {
                    div { class: "demo-banner",
                        "Demo mode: new and cancelled pickups are not saved."
                    }
                }
                main { class: "app-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
