//! # Dashboard root
//!
//! [`Dashboard`] owns everything shared: the [`AppState`] signal, the data
//! service, the session store, the connectivity monitor and the alert. On
//! mount it tests the connection, runs the bootstrap fetch and then tries to
//! restore the remembered session, in that order.
//!
//! While nobody is signed in only the login view renders. Afterwards the
//! shell shows navigation chrome around whatever [`resolve`] picks for the
//! current screen. Screens get data through props and change state only
//! through the callbacks built here.

use dioxus::prelude::*;
use store::defaults::default_notifications;
use store::{
    Collections, ConnectivityMonitor, DataService, Developer, HubConfig, Lead, Lesson, TrainingModule,
    User,
};

use crate::auth::LoginView;
use crate::connectivity::{use_connectivity_provider, use_periodic_recheck};
use crate::navbar::Navbar;
use crate::online_indicator::CloudStatusBar;
use crate::service::{make_service, make_session, AppService, AppSessionStorage, CloudProbe};
use crate::sidebar::AppSidebar;
use crate::state::bootstrap::fetch_collections;
use crate::state::router::{resolve, RouteView};
use crate::state::seed::seed_backend;
use crate::state::{AppState, Screen, SessionStore};
use crate::views::*;

pub const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");

type AppSession = SessionStore<AppSessionStorage>;

/// The shared application state.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

#[component]
pub fn Dashboard(#[props(default)] config: HubConfig) -> Element {
    let monitor = use_hook(ConnectivityMonitor::default);
    use_connectivity_provider(monitor.clone());
    use_periodic_recheck(monitor.clone());

    let service = use_context_provider(|| make_service(monitor.clone()));
    let session = use_context_provider(|| make_session(&config));
    let mut state =
        use_signal(|| AppState::new(Collections::bundled(), default_notifications()));
    use_context_provider(|| state);
    use_alert_provider();

    use_effect({
        let service = service.clone();
        let session = session.clone();
        move || {
            let monitor = monitor.clone();
            let service = service.clone();
            let session = session.clone();
            spawn(async move {
                monitor.refresh(&CloudProbe).await;
                let fetched = fetch_collections(&service).await;
                state.with_mut(|s| {
                    s.finish_bootstrap(fetched);
                    s.restore_session(&session);
                });
            });
        }
    });

    let signed_in = state.read().current_user.is_some();

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }
        if signed_in {
            AppShell {}
        } else {
            LoginView {
                users: state.read().collections.users.clone(),
                loading: !state.read().data_loaded,
                on_login: move |user: User| state.write().login(user, &session),
            }
        }
        AlertDialog {}
    }
}

/// Navigation chrome around the current screen.
#[component]
fn AppShell() -> Element {
    let mut state = use_app_state();
    let app = state();
    let Some(user) = app.current_user.clone() else {
        return rsx! {};
    };
    let screen = app.screen();

    rsx! {
        div {
            class: "app-shell",
            AppSidebar {
                user: user,
                current: screen,
                on_navigate: move |s: Screen| state.write().navigate(s),
            }
            div {
                class: "app-main",
                CloudStatusBar { on_open_settings: move |_| state.write().navigate(Screen::Settings) }
                Navbar {
                    title: screen.title().to_string(),
                    show_back: screen.parent().is_some(),
                    unread: app.unread_notifications(),
                    on_back: move |_| state.write().back(),
                    on_notifications: move |_| state.write().navigate(Screen::Notifications),
                }
                main {
                    class: "app-content",
                    if app.data_loaded {
                        ScreenOutlet {}
                    } else {
                        div { class: "loading", "Loading data..." }
                    }
                }
            }
        }
    }
}

/// Renders the single view [`resolve`] picks, or nothing when the screen
/// lacks its selection.
#[component]
fn ScreenOutlet() -> Element {
    let mut state = use_app_state();
    let service = use_context::<AppService>();
    let session = use_context::<AppSession>();
    let alert = use_alert();

    let app = state();
    let Some(user) = app.current_user.clone() else {
        return rsx! {};
    };
    let Some(view) = resolve(&app) else {
        return rsx! {};
    };

    let on_back = move |_: ()| state.write().back();
    let on_navigate = move |s: Screen| state.write().navigate(s);
    let on_open_lead = move |lead: Lead| state.write().open_lead(lead);

    match view {
        RouteView::Home => rsx! {
            HomeView {
                user: user,
                leads: app.collections.leads.clone(),
                developers: app.collections.developers.clone(),
                unread: app.unread_notifications(),
                on_open_lead: on_open_lead,
                on_navigate: on_navigate,
                on_ask_assistant: move |_| state.write().ask_assistant(None),
            }
        },
        RouteView::LeadsList => rsx! {
            LeadsListView { leads: app.collections.leads.clone(), on_open_lead: on_open_lead }
        },
        RouteView::LeadDetail(lead) => rsx! {
            LeadDetailView {
                key: "{lead.id}",
                lead: lead.clone(),
                on_back: on_back,
                on_ask_assistant: move |context: String| state.write().ask_assistant(Some(context)),
            }
        },
        RouteView::Developers => rsx! {
            DevelopersView {
                developers: app.collections.developers.clone(),
                elevated: app.is_elevated(),
                on_open_developer: move |developer: Developer| state.write().open_developer(developer),
                on_navigate: on_navigate,
            }
        },
        RouteView::FolderView(developer) => rsx! {
            FolderView { key: "{developer.id}", developer: developer.clone(), on_back: on_back }
        },
        RouteView::AssistantChat(context) => rsx! {
            AssistantChatView {
                context: context.map(str::to_string),
                on_clear_context: move |_| state.write().clear_assistant_context(),
            }
        },
        RouteView::Training => rsx! {
            TrainingView {
                modules: app.collections.training.clone(),
                elevated: app.is_elevated(),
                on_open_lesson: move |(module, lesson): (TrainingModule, Lesson)| {
                    state.write().open_lesson(&module, lesson)
                },
                on_open_exam: move |module: TrainingModule| state.write().open_exam(module),
                on_navigate: on_navigate,
            }
        },
        RouteView::TrainingLesson(selection) => rsx! {
            TrainingLessonView {
                key: "{selection.lesson.id}",
                selection: selection.clone(),
                on_back: on_back,
            }
        },
        RouteView::TrainingExam(module) => rsx! {
            TrainingExamView { key: "{module.id}", module: module.clone(), on_back: on_back }
        },
        RouteView::Notifications => rsx! {
            NotificationsView {
                notifications: app.notifications.clone(),
                on_mark_read: move |id: String| state.write().mark_notification_read(&id),
            }
        },
        RouteView::Settings => rsx! {
            SettingsView {
                user: user,
                on_navigate: on_navigate,
                on_logout: move |_| state.write().logout(&session),
                on_seed: move |_| {
                    let remote = service.remote().clone();
                    let users = state.read().collections.users.clone();
                    spawn(async move {
                        let message = match seed_backend(&remote, &users).await {
                            Ok(()) => "Database activated with the bundled data.".to_string(),
                            Err(e) => {
                                tracing::error!("seeding failed: {e}");
                                e.to_string()
                            }
                        };
                        alert.show(message);
                    });
                },
            }
        },
        RouteView::ProfileEdit => rsx! {
            ProfileEditView {
                user: user,
                on_save: move |updated: User| {
                    state.write().update_user(updated.clone());
                    state.write().back();
                    let service = service.clone();
                    spawn(async move {
                        if let Err(e) = service.save_user(&updated).await {
                            tracing::error!("saving profile failed: {e}");
                            alert.show(format!("Profile saved on this screen only: {e}"));
                        }
                    });
                },
                on_back: on_back,
            }
        },
        RouteView::Unavailable(screen) => rsx! {
            UnavailableView { screen: screen, on_back: on_back }
        },
    }
}
