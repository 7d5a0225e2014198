//! # Application state
//!
//! [`AppState`] is the single container the dashboard renders from: the
//! signed-in user, the loaded collections, the current [`Screen`] and the
//! entity selections detail screens need. Components never edit it directly;
//! they receive callbacks that call the methods below on the shared signal.
//!
//! Everything here is plain Rust so it can be unit tested without a renderer.

pub mod bootstrap;
pub mod router;
pub mod screen;
pub mod seed;
pub mod session;
#[cfg(test)]
mod testing;

use store::{Collections, Developer, Lead, Lesson, Notification, SessionStorage, TrainingModule, User};

pub use screen::{NavItem, Screen, Selection, NAV_ITEMS};
pub use session::{authenticate, LoginError, SessionStore};

/// A lesson together with the module it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedLesson {
    pub module_id: String,
    pub module_title: String,
    pub lesson: Lesson,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub current_user: Option<User>,
    pub data_loaded: bool,
    pub collections: Collections,
    pub notifications: Vec<Notification>,
    screen: Screen,
    selected_lead: Option<Lead>,
    selected_developer: Option<Developer>,
    selected_lesson: Option<SelectedLesson>,
    selected_exam: Option<TrainingModule>,
    assistant_context: Option<String>,
}

impl AppState {
    /// State before bootstrap: `defaults` are shown until the fetch lands.
    pub fn new(defaults: Collections, notifications: Vec<Notification>) -> Self {
        Self {
            current_user: None,
            data_loaded: false,
            collections: defaults,
            notifications,
            screen: Screen::DEFAULT,
            selected_lead: None,
            selected_developer: None,
            selected_lesson: None,
            selected_exam: None,
            assistant_context: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected_lead(&self) -> Option<&Lead> {
        self.selected_lead.as_ref()
    }

    pub fn selected_developer(&self) -> Option<&Developer> {
        self.selected_developer.as_ref()
    }

    pub fn selected_lesson(&self) -> Option<&SelectedLesson> {
        self.selected_lesson.as_ref()
    }

    pub fn selected_exam(&self) -> Option<&TrainingModule> {
        self.selected_exam.as_ref()
    }

    pub fn assistant_context(&self) -> Option<&str> {
        self.assistant_context.as_deref()
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn is_elevated(&self) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(|u| u.role.is_elevated())
    }

    /// Selections survive navigation.
    pub fn navigate(&mut self, screen: Screen) {
        tracing::debug!("navigate {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
    }

    pub fn back(&mut self) {
        let target = self.screen.parent().unwrap_or(Screen::DEFAULT);
        self.navigate(target);
    }

    pub fn open_lead(&mut self, lead: Lead) {
        self.selected_lead = Some(lead);
        self.navigate(Screen::LeadDetail);
    }

    pub fn open_developer(&mut self, developer: Developer) {
        self.selected_developer = Some(developer);
        self.navigate(Screen::FolderView);
    }

    pub fn open_lesson(&mut self, module: &TrainingModule, lesson: Lesson) {
        self.selected_lesson = Some(SelectedLesson {
            module_id: module.id.clone(),
            module_title: module.title.clone(),
            lesson,
        });
        self.navigate(Screen::TrainingLesson);
    }

    pub fn open_exam(&mut self, module: TrainingModule) {
        self.selected_exam = Some(module);
        self.navigate(Screen::TrainingExam);
    }

    /// Hand `context` to the assistant and switch to the chat.
    pub fn ask_assistant(&mut self, context: Option<String>) {
        self.assistant_context = context;
        self.navigate(Screen::AssistantChat);
    }

    pub fn clear_assistant_context(&mut self) {
        self.assistant_context = None;
    }

    pub fn login<S: SessionStorage>(&mut self, user: User, session: &SessionStore<S>) {
        tracing::info!("signed in as {}", user.email);
        session.remember(&user);
        self.current_user = Some(user);
    }

    /// Sign in the remembered user, if the stored id is still valid.
    pub fn restore_session<S: SessionStorage>(&mut self, session: &SessionStore<S>) {
        if self.current_user.is_some() {
            return;
        }
        if let Some(user) = session.restore(&self.collections.users) {
            tracing::info!("restored session for {}", user.email);
            self.current_user = Some(user);
        }
    }

    pub fn logout<S: SessionStorage>(&mut self, session: &SessionStore<S>) {
        if let Some(user) = self.current_user.take() {
            tracing::info!("signed out {}", user.email);
        }
        session.forget();
        self.screen = Screen::DEFAULT;
    }

    /// Replace a user in the collection and, when it is the signed-in user,
    /// the session copy too.
    pub fn update_user(&mut self, user: User) {
        match self.collections.users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => self.collections.users.push(user.clone()),
        }
        if self.current_user.as_ref().is_some_and(|u| u.id == user.id) {
            self.current_user = Some(user);
        }
    }

    pub fn mark_notification_read(&mut self, id: &str) {
        if let Some(n) = self.notifications.iter_mut().find(|n| n.id == id) {
            n.read = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::defaults::{default_leads, default_notifications};
    use store::{MemorySessionStorage, SESSION_KEY};

    fn state() -> AppState {
        AppState::new(Collections::bundled(), default_notifications())
    }

    fn session() -> (MemorySessionStorage, SessionStore<MemorySessionStorage>) {
        let storage = MemorySessionStorage::new();
        (storage.clone(), SessionStore::new(storage, SESSION_KEY))
    }

    #[test]
    fn test_open_lead_then_back_keeps_selection() {
        let mut app = state();
        let lead = default_leads().remove(0);
        app.navigate(Screen::LeadsList);
        app.open_lead(lead.clone());
        assert_eq!(app.screen(), Screen::LeadDetail);

        app.back();
        assert_eq!(app.screen(), Screen::LeadsList);
        assert_eq!(app.selected_lead(), Some(&lead));
    }

    #[test]
    fn test_back_from_top_level_goes_home() {
        let mut app = state();
        app.navigate(Screen::Training);
        app.back();
        assert_eq!(app.screen(), Screen::DEFAULT);
    }

    #[test]
    fn test_logout_from_any_screen() {
        for screen in Screen::ALL {
            let (storage, session) = session();
            let mut app = state();
            let user = app.collections.users[0].clone();
            app.login(user, &session);
            app.navigate(screen);

            app.logout(&session);

            assert!(app.current_user.is_none());
            assert!(storage.get(SESSION_KEY).is_none());
            assert_eq!(app.screen(), Screen::DEFAULT);
        }
    }

    #[test]
    fn test_login_persists_and_restores() {
        let (storage, session) = session();
        let mut app = state();
        let user = app.collections.users[0].clone();
        app.login(user.clone(), &session);
        assert_eq!(storage.get(SESSION_KEY), Some(user.id.clone()));

        let mut fresh = state();
        fresh.restore_session(&session);
        assert_eq!(fresh.current_user, Some(user));
    }

    #[test]
    fn test_ask_assistant_carries_context() {
        let mut app = state();
        let lead = default_leads().remove(0);
        app.open_lead(lead.clone());
        app.ask_assistant(Some(lead.assistant_context()));
        assert_eq!(app.screen(), Screen::AssistantChat);
        assert!(app.assistant_context().is_some_and(|c| c.contains(&lead.name)));

        app.clear_assistant_context();
        assert!(app.assistant_context().is_none());
    }

    #[test]
    fn test_update_user_refreshes_current_user() {
        let (_, session) = session();
        let mut app = state();
        let mut user = app.collections.users[0].clone();
        app.login(user.clone(), &session);

        user.name = "Renamed".into();
        app.update_user(user.clone());

        assert_eq!(app.current_user.as_ref().map(|u| u.name.as_str()), Some("Renamed"));
        assert_eq!(app.collections.users[0].name, "Renamed");
    }

    #[test]
    fn test_mark_notification_read() {
        let mut app = state();
        let before = app.unread_notifications();
        let id = app.notifications.iter().find(|n| !n.read).map(|n| n.id.clone()).unwrap();
        app.mark_notification_read(&id);
        assert_eq!(app.unread_notifications(), before - 1);
    }
}
