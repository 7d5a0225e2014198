//! The closed set of screens and their route table.

use serde::{Deserialize, Serialize};

/// Every navigable view. Exactly one is current at any time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Home,
    LeadsList,
    LeadDetail,
    InventoryList,
    AssistantChat,
    Opportunity,
    Simulator,
    Developers,
    FolderView,
    Notifications,
    Settings,
    ProfileEdit,
    IntegrationsConfig,
    Management,
    Metrics,
    DriveCurator,
    UserManagement,
    Training,
    TrainingLesson,
    TrainingExam,
    TrainingCurator,
    AssistantConfig,
}

/// Entity a screen needs selected before it can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Lead,
    Developer,
    Lesson,
    Exam,
}

/// An entry of the side navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub screen: Screen,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { screen: Screen::Home, label: "Home" },
    NavItem { screen: Screen::LeadsList, label: "Leads" },
    NavItem { screen: Screen::Developers, label: "Folders" },
    NavItem { screen: Screen::Training, label: "Academy" },
    NavItem { screen: Screen::Settings, label: "Settings" },
];

impl Screen {
    /// Where a fresh session and a logout land.
    pub const DEFAULT: Screen = Screen::Home;

    pub const ALL: [Screen; 22] = [
        Screen::Home,
        Screen::LeadsList,
        Screen::LeadDetail,
        Screen::InventoryList,
        Screen::AssistantChat,
        Screen::Opportunity,
        Screen::Simulator,
        Screen::Developers,
        Screen::FolderView,
        Screen::Notifications,
        Screen::Settings,
        Screen::ProfileEdit,
        Screen::IntegrationsConfig,
        Screen::Management,
        Screen::Metrics,
        Screen::DriveCurator,
        Screen::UserManagement,
        Screen::Training,
        Screen::TrainingLesson,
        Screen::TrainingExam,
        Screen::TrainingCurator,
        Screen::AssistantConfig,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::LeadsList => "Leads",
            Screen::LeadDetail => "Lead",
            Screen::InventoryList => "Inventory",
            Screen::AssistantChat => "Vera",
            Screen::Opportunity => "Opportunity",
            Screen::Simulator => "Simulator",
            Screen::Developers => "Folders",
            Screen::FolderView => "Folder",
            Screen::Notifications => "Notifications",
            Screen::Settings => "Settings",
            Screen::ProfileEdit => "Profile",
            Screen::IntegrationsConfig => "Integrations",
            Screen::Management => "Management",
            Screen::Metrics => "Metrics",
            Screen::DriveCurator => "Drive curator",
            Screen::UserManagement => "Users",
            Screen::Training => "Academy",
            Screen::TrainingLesson => "Lesson",
            Screen::TrainingExam => "Exam",
            Screen::TrainingCurator => "Academy curator",
            Screen::AssistantConfig => "Vera settings",
        }
    }

    /// Screen that "back" returns to. Top-level screens have none.
    pub fn parent(self) -> Option<Screen> {
        match self {
            Screen::Home
            | Screen::LeadsList
            | Screen::Developers
            | Screen::Training
            | Screen::Settings => None,
            Screen::LeadDetail => Some(Screen::LeadsList),
            Screen::Opportunity => Some(Screen::LeadsList),
            Screen::FolderView | Screen::InventoryList | Screen::DriveCurator => {
                Some(Screen::Developers)
            }
            Screen::TrainingLesson | Screen::TrainingExam | Screen::TrainingCurator => {
                Some(Screen::Training)
            }
            Screen::ProfileEdit
            | Screen::IntegrationsConfig
            | Screen::Management
            | Screen::AssistantConfig => Some(Screen::Settings),
            Screen::UserManagement => Some(Screen::Management),
            Screen::AssistantChat
            | Screen::Simulator
            | Screen::Notifications
            | Screen::Metrics => Some(Screen::Home),
        }
    }

    pub fn required_selection(self) -> Option<Selection> {
        match self {
            Screen::LeadDetail => Some(Selection::Lead),
            Screen::FolderView => Some(Selection::Developer),
            Screen::TrainingLesson => Some(Selection::Lesson),
            Screen::TrainingExam => Some(Selection::Exam),
            _ => None,
        }
    }

    /// Whether the side navigation should highlight `item` for this screen.
    pub fn is_within(self, item: Screen) -> bool {
        let mut current = Some(self);
        while let Some(screen) = current {
            if screen == item {
                return true;
            }
            current = screen.parent();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_parent_chain_reaches_a_top_level_screen() {
        for screen in Screen::ALL {
            let mut current = screen;
            let mut hops = 0;
            while let Some(parent) = current.parent() {
                current = parent;
                hops += 1;
                assert!(hops < Screen::ALL.len(), "cycle from {screen:?}");
            }
            assert!(
                NAV_ITEMS.iter().any(|item| item.screen == current),
                "{screen:?} ends at {current:?}"
            );
        }
    }

    #[test]
    fn test_detail_screens_return_to_their_lists() {
        assert_eq!(Screen::LeadDetail.parent(), Some(Screen::LeadsList));
        assert_eq!(Screen::FolderView.parent(), Some(Screen::Developers));
        assert_eq!(Screen::TrainingExam.parent(), Some(Screen::Training));
    }

    #[test]
    fn test_is_within_follows_parents() {
        assert!(Screen::UserManagement.is_within(Screen::Settings));
        assert!(Screen::LeadDetail.is_within(Screen::LeadsList));
        assert!(!Screen::LeadDetail.is_within(Screen::Home));
    }

    #[test]
    fn test_all_lists_each_screen_once() {
        for (i, a) in Screen::ALL.iter().enumerate() {
            assert!(Screen::ALL[i + 1..].iter().all(|b| b != a));
        }
    }
}
