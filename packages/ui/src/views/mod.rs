mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod alert_dialog;
pub use alert_dialog::{use_alert, use_alert_provider, Alert, AlertDialog};

mod unavailable;
pub use unavailable::UnavailableView;

mod home;
pub use home::{HomeView, LeadRow};

mod leads;
pub use leads::{LeadDetailView, LeadsListView};

mod developers;
pub use developers::{DevelopersView, FolderView};

mod assistant;
pub use assistant::AssistantChatView;

mod training;
pub use training::{TrainingExamView, TrainingLessonView, TrainingView};

mod notifications;
pub use notifications::NotificationsView;

mod profile;
pub use profile::ProfileEditView;

mod settings;
pub use settings::SettingsView;
