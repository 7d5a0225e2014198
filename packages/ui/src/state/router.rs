//! Maps the current screen to the one view the main area renders.

use store::{Developer, Lead, TrainingModule};

use super::{AppState, Screen, SelectedLesson};

/// What the main area shows, borrowing any selection from the state.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteView<'a> {
    Home,
    LeadsList,
    LeadDetail(&'a Lead),
    Developers,
    FolderView(&'a Developer),
    AssistantChat(Option<&'a str>),
    Training,
    TrainingLesson(&'a SelectedLesson),
    TrainingExam(&'a TrainingModule),
    Notifications,
    Settings,
    ProfileEdit,
    /// A screen with no view yet.
    Unavailable(Screen),
}

impl RouteView<'_> {
    pub fn screen(&self) -> Screen {
        match self {
            RouteView::Home => Screen::Home,
            RouteView::LeadsList => Screen::LeadsList,
            RouteView::LeadDetail(_) => Screen::LeadDetail,
            RouteView::Developers => Screen::Developers,
            RouteView::FolderView(_) => Screen::FolderView,
            RouteView::AssistantChat(_) => Screen::AssistantChat,
            RouteView::Training => Screen::Training,
            RouteView::TrainingLesson(_) => Screen::TrainingLesson,
            RouteView::TrainingExam(_) => Screen::TrainingExam,
            RouteView::Notifications => Screen::Notifications,
            RouteView::Settings => Screen::Settings,
            RouteView::ProfileEdit => Screen::ProfileEdit,
            RouteView::Unavailable(screen) => *screen,
        }
    }
}

/// `None` when the current screen needs a selection that is not set.
pub fn resolve(state: &AppState) -> Option<RouteView<'_>> {
    let view = match state.screen() {
        Screen::Home => RouteView::Home,
        Screen::LeadsList => RouteView::LeadsList,
        Screen::LeadDetail => RouteView::LeadDetail(state.selected_lead()?),
        Screen::Developers => RouteView::Developers,
        Screen::FolderView => RouteView::FolderView(state.selected_developer()?),
        Screen::AssistantChat => RouteView::AssistantChat(state.assistant_context()),
        Screen::Training => RouteView::Training,
        Screen::TrainingLesson => RouteView::TrainingLesson(state.selected_lesson()?),
        Screen::TrainingExam => RouteView::TrainingExam(state.selected_exam()?),
        Screen::Notifications => RouteView::Notifications,
        Screen::Settings => RouteView::Settings,
        Screen::ProfileEdit => RouteView::ProfileEdit,
        other => RouteView::Unavailable(other),
    };
    Some(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::defaults::{default_developers, default_leads, default_notifications, default_training};
    use store::Collections;

    fn state() -> AppState {
        AppState::new(Collections::bundled(), default_notifications())
    }

    #[test]
    fn test_every_screen_resolves_to_itself_after_navigation() {
        for from in Screen::ALL {
            for to in Screen::ALL {
                let mut app = state();
                app.navigate(from);
                app.navigate(to);
                match resolve(&app) {
                    Some(view) => assert_eq!(view.screen(), to),
                    None => assert!(to.required_selection().is_some(), "{to:?} rendered nothing"),
                }
            }
        }
    }

    #[test]
    fn test_detail_without_selection_renders_nothing() {
        let mut app = state();
        app.navigate(Screen::LeadDetail);
        assert!(resolve(&app).is_none());
        app.navigate(Screen::FolderView);
        assert!(resolve(&app).is_none());
    }

    #[test]
    fn test_selections_resolve_once_set() {
        let mut app = state();
        let lead = default_leads().remove(0);
        app.open_lead(lead.clone());
        assert_eq!(resolve(&app), Some(RouteView::LeadDetail(&lead)));

        let developer = default_developers().remove(0);
        app.open_developer(developer.clone());
        assert_eq!(resolve(&app), Some(RouteView::FolderView(&developer)));

        let module = default_training().remove(0);
        app.open_lesson(&module, module.lessons[0].clone());
        assert!(matches!(resolve(&app), Some(RouteView::TrainingLesson(l)) if l.module_id == module.id));

        app.open_exam(module.clone());
        assert_eq!(resolve(&app), Some(RouteView::TrainingExam(&module)));
    }

    #[test]
    fn test_unwired_screen_is_named() {
        let mut app = state();
        app.navigate(Screen::Simulator);
        assert_eq!(resolve(&app), Some(RouteView::Unavailable(Screen::Simulator)));
    }
}
