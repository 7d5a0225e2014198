//! Bundled sample data.
//!
//! The dashboard starts from these collections and keeps them whenever the
//! data service has nothing stored (or cannot be reached). Seeding a fresh
//! backend writes them out.

use crate::models::{
    Developer, ExamQuestion, Lead, LeadStatus, Lesson, Notification, Project, Role,
    TrainingModule, User,
};
use crate::service::Collections;

impl Collections {
    /// The bundled defaults for all four collections.
    pub fn bundled() -> Self {
        Self {
            users: default_users(),
            leads: default_leads(),
            developers: default_developers(),
            training: default_training(),
        }
    }
}

pub fn default_users() -> Vec<User> {
    vec![User {
        id: "u-head".to_string(),
        name: "PSM Head".to_string(),
        email: "head@psm.local".to_string(),
        role: Role::Head,
        password: "psm".to_string(),
        is_active: true,
        photo_url: None,
    }]
}

fn lead(
    id: &str,
    name: &str,
    phone: &str,
    status: LeadStatus,
    source: &str,
    interest: Option<&str>,
    budget: Option<u64>,
    notes: &str,
) -> Lead {
    Lead {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        email: None,
        status,
        source: source.to_string(),
        interest: interest.map(str::to_string),
        budget,
        notes: notes.to_string(),
    }
}

pub fn default_leads() -> Vec<Lead> {
    vec![
        lead(
            "l-001",
            "Marina Costa",
            "+55 11 90000-1001",
            LeadStatus::New,
            "Instagram",
            Some("Harbor View Residences"),
            Some(650_000),
            "Asked for floor plans with three bedrooms.",
        ),
        lead(
            "l-002",
            "Rafael Lima",
            "+55 11 90000-1002",
            LeadStatus::Contacted,
            "Referral",
            Some("Parque Alto"),
            Some(420_000),
            "",
        ),
        lead(
            "l-003",
            "Beatriz Souza",
            "+55 11 90000-1003",
            LeadStatus::Visit,
            "Website",
            Some("Harbor View Residences"),
            Some(900_000),
            "Visit booked for Saturday morning.",
        ),
        lead(
            "l-004",
            "Thiago Mendes",
            "+55 11 90000-1004",
            LeadStatus::Proposal,
            "Walk-in",
            Some("Vila Jardim"),
            None,
            "Wants to use FGTS for the down payment.",
        ),
        lead(
            "l-005",
            "Camila Rocha",
            "+55 11 90000-1005",
            LeadStatus::Lost,
            "Instagram",
            None,
            None,
            "Bought elsewhere.",
        ),
    ]
}

pub fn default_developers() -> Vec<Developer> {
    vec![
        Developer {
            id: "d-horizonte".to_string(),
            name: "Horizonte Incorporadora".to_string(),
            logo_url: None,
            drive_url: Some("https://drive.google.com/drive/folders/horizonte".to_string()),
            description: "High-end waterfront developments.".to_string(),
            projects: vec![
                Project {
                    name: "Harbor View Residences".to_string(),
                    neighborhood: "Marina".to_string(),
                    status: "Under construction".to_string(),
                    starting_price: Some(610_000),
                },
                Project {
                    name: "Harbor View II".to_string(),
                    neighborhood: "Marina".to_string(),
                    status: "Launch".to_string(),
                    starting_price: Some(720_000),
                },
            ],
        },
        Developer {
            id: "d-verde".to_string(),
            name: "Verde Urbano".to_string(),
            logo_url: None,
            drive_url: Some("https://drive.google.com/drive/folders/verde".to_string()),
            description: "Mid-market condominiums with leisure areas.".to_string(),
            projects: vec![
                Project {
                    name: "Parque Alto".to_string(),
                    neighborhood: "Centro".to_string(),
                    status: "Ready".to_string(),
                    starting_price: Some(380_000),
                },
                Project {
                    name: "Vila Jardim".to_string(),
                    neighborhood: "Jardins".to_string(),
                    status: "Launch".to_string(),
                    starting_price: Some(450_000),
                },
            ],
        },
        Developer {
            id: "d-solar".to_string(),
            name: "Solar Empreendimentos".to_string(),
            logo_url: None,
            drive_url: None,
            description: "Entry-level housing programmes.".to_string(),
            projects: Vec::new(),
        },
    ]
}

fn question(id: &str, text: &str, options: &[&str], correct_option: usize) -> ExamQuestion {
    ExamQuestion {
        id: id.to_string(),
        question: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_option,
    }
}

pub fn default_training() -> Vec<TrainingModule> {
    vec![
        TrainingModule {
            id: "t-onboarding".to_string(),
            title: "Onboarding".to_string(),
            description: "How the team works, from first contact to signed contract.".to_string(),
            lessons: vec![
                Lesson {
                    id: "t-onboarding-1".to_string(),
                    title: "Our sales pipeline".to_string(),
                    duration_minutes: 12,
                    content: "# Our sales pipeline\n\n\
                        Every lead moves through **New**, **Contacted**, **Visit**, \
                        **Proposal** and ends as **Won** or **Lost**.\n\n\
                        - Answer new leads within one hour.\n\
                        - Log every call in the lead notes.\n"
                        .to_string(),
                    video_url: None,
                },
                Lesson {
                    id: "t-onboarding-2".to_string(),
                    title: "Using developer folders".to_string(),
                    duration_minutes: 8,
                    content: "# Developer folders\n\n\
                        Each developer folder links to its shared drive with price \
                        tables, floor plans and renders. Always send the latest table.\n"
                        .to_string(),
                    video_url: None,
                },
            ],
            exam: vec![
                question(
                    "q-1",
                    "How quickly should a new lead be answered?",
                    &["Within one hour", "Within one day", "Within one week"],
                    0,
                ),
                question(
                    "q-2",
                    "Which status comes right after a scheduled visit?",
                    &["New", "Proposal", "Lost"],
                    1,
                ),
                question(
                    "q-3",
                    "Where are price tables kept?",
                    &["In lead notes", "In the developer's shared drive", "In the chat"],
                    1,
                ),
            ],
        },
        TrainingModule {
            id: "t-financing".to_string(),
            title: "Financing basics".to_string(),
            description: "Down payments, bank financing and the FGTS fund.".to_string(),
            lessons: vec![Lesson {
                id: "t-financing-1".to_string(),
                title: "Down payment and instalments".to_string(),
                duration_minutes: 15,
                content: "# Down payment and instalments\n\n\
                    Most launches accept a down payment split into monthly \
                    instalments during construction, with the balance financed \
                    at delivery.\n"
                    .to_string(),
                video_url: None,
            }],
            exam: Vec::new(),
        },
    ]
}

pub fn default_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "n-welcome".to_string(),
            title: "Welcome to PSM Hub".to_string(),
            body: "Start with the Onboarding module in the Academy.".to_string(),
            read: false,
        },
        Notification {
            id: "n-launch".to_string(),
            title: "New launch: Harbor View II".to_string(),
            body: "Price table available in the Horizonte folder.".to_string(),
            read: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_collections_are_populated() {
        let bundled = Collections::bundled();
        assert!(!bundled.users.is_empty());
        assert!(!bundled.leads.is_empty());
        assert!(!bundled.developers.is_empty());
        assert!(!bundled.training.is_empty());
    }

    #[test]
    fn test_default_head_can_sign_in() {
        let users = default_users();
        assert!(users[0].is_active);
        assert!(users[0].role.is_elevated());
    }

    #[test]
    fn test_exam_answers_are_in_range() {
        for module in default_training() {
            for q in &module.exam {
                assert!(q.correct_option < q.options.len(), "{}", q.id);
            }
        }
    }
}
