//! This crate contains all shared UI for the workspace: the application
//! state and router, the data-service wiring, and every component.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod state;
pub use state::seed::SeedError;
pub use state::{AppState, LoginError, Screen};

mod service;
pub use service::{
    load_config, make_service, make_session, AppService, AppSessionStorage, CloudProbe,
    CloudService, LocalStore,
};

mod connectivity;
pub use connectivity::{use_diagnostics, use_monitor};

mod markdown;
pub use markdown::render_markdown;

pub mod views;

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{LoginView, LogoutButton};

mod online_indicator;
pub use online_indicator::CloudStatusBar;

mod sidebar;
pub use sidebar::AppSidebar;

mod dashboard;
pub use dashboard::{use_app_state, Dashboard, DASHBOARD_CSS};
