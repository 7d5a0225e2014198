//! # Domain models for the sales dashboard
//!
//! Plain records shared by every backend and by the server functions in the
//! `api` crate. They are `Serialize + Deserialize` so they can cross the
//! server/client boundary and be written to TOML, IndexedDB or PostgreSQL
//! JSONB without conversion.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A team member. Carries the login credential, an active flag and a [`Role`]. |
//! | [`Lead`] | A sales prospect and its pipeline [`LeadStatus`]. |
//! | [`Developer`] | A property developer folder holding its [`Project`]s. |
//! | [`TrainingModule`] | Academy content: ordered [`Lesson`]s plus an exam of [`ExamQuestion`]s. |
//! | [`Notification`] | A message shown on the notifications screen. |
//!
//! [`score_exam`] grades a set of answers against a module's exam.

use serde::{Deserialize, Serialize};

/// Share of correct answers needed to pass an exam, in percent.
pub const EXAM_PASS_PERCENT: u32 = 70;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Broker,
    /// Sales head. Sees curation and seeding actions.
    Head,
}

impl Role {
    pub fn is_elevated(self) -> bool {
        matches!(self, Role::Head)
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Broker => "Broker",
            Role::Head => "Head",
        }
    }
}

/// A dashboard user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    /// Login credential, compared verbatim.
    pub password: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

fn default_true() -> bool {
    true
}

impl User {
    /// First letter of the name, used when there is no photo.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Visit,
    Proposal,
    Won,
    Lost,
}

impl LeadStatus {
    pub fn label(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Visit => "Visit scheduled",
            LeadStatus::Proposal => "Proposal",
            LeadStatus::Won => "Won",
            LeadStatus::Lost => "Lost",
        }
    }

    /// Whether the lead is still in the pipeline.
    pub fn is_open(self) -> bool {
        !matches!(self, LeadStatus::Won | LeadStatus::Lost)
    }
}

/// A sales prospect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    /// Acquisition channel: "Instagram", "Referral", ...
    #[serde(default)]
    pub source: String,
    /// Development or property the lead asked about.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,
    #[serde(default)]
    pub notes: String,
}

impl Lead {
    /// Plain-text summary handed to the assistant as conversation context.
    pub fn assistant_context(&self) -> String {
        let mut ctx = format!(
            "Lead {} ({}), status: {}, source: {}.",
            self.name,
            self.phone,
            self.status.label(),
            self.source
        );
        if let Some(ref interest) = self.interest {
            ctx.push_str(&format!(" Interested in {interest}."));
        }
        if let Some(budget) = self.budget {
            ctx.push_str(&format!(" Budget: {budget}."));
        }
        if !self.notes.is_empty() {
            ctx.push_str(&format!(" Notes: {}", self.notes));
        }
        ctx
    }
}

/// A development inside a developer folder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub neighborhood: String,
    /// "Launch", "Under construction", "Ready", ...
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_price: Option<u64>,
}

/// A property developer ("folder" in the UI).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Shared drive folder with sales material.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_url: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub duration_minutes: u32,
    /// Markdown body.
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExamQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_option: usize,
}

impl ExamQuestion {
    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct_option
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingModule {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(default)]
    pub exam: Vec<ExamQuestion>,
}

impl TrainingModule {
    pub fn total_minutes(&self) -> u32 {
        self.lessons.iter().map(|l| l.duration_minutes).sum()
    }

    pub fn has_exam(&self) -> bool {
        !self.exam.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub read: bool,
}

/// Outcome of grading an exam.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExamScore {
    pub correct: usize,
    pub total: usize,
}

impl ExamScore {
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct * 100 / self.total) as u32
    }

    pub fn passed(&self) -> bool {
        self.total > 0 && self.percent() >= EXAM_PASS_PERCENT
    }
}

/// Grade `answers` (one optional option index per question, in order).
/// Unanswered and missing questions count as wrong.
pub fn score_exam(questions: &[ExamQuestion], answers: &[Option<usize>]) -> ExamScore {
    let correct = questions
        .iter()
        .enumerate()
        .filter(|(i, q)| matches!(answers.get(*i), Some(Some(a)) if q.is_correct(*a)))
        .count();
    ExamScore {
        correct,
        total: questions.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, correct: usize) -> ExamQuestion {
        ExamQuestion {
            id: id.to_string(),
            question: format!("Question {id}"),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_option: correct,
        }
    }

    #[test]
    fn test_exam_passes_at_seventy_percent() {
        let questions: Vec<_> = (0..10).map(|i| question(&i.to_string(), 1)).collect();

        let mut answers = vec![Some(1); 7];
        answers.extend([Some(0), None, Some(2)]);
        let score = score_exam(&questions, &answers);
        assert_eq!(score.correct, 7);
        assert_eq!(score.percent(), 70);
        assert!(score.passed());

        answers[0] = Some(2);
        assert!(!score_exam(&questions, &answers).passed());
    }

    #[test]
    fn test_missing_answers_count_as_wrong() {
        let questions = vec![question("1", 0), question("2", 2)];
        let score = score_exam(&questions, &[Some(0)]);
        assert_eq!(score, ExamScore { correct: 1, total: 2 });
    }

    #[test]
    fn test_empty_exam_never_passes() {
        let score = score_exam(&[], &[]);
        assert_eq!(score.percent(), 0);
        assert!(!score.passed());
    }

    #[test]
    fn test_role_serializes_screaming_case() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            role: Role,
        }
        let text = toml::to_string(&Wrapper { role: Role::Head }).unwrap();
        assert_eq!(text.trim(), "role = \"HEAD\"");
        let parsed: Wrapper = toml::from_str("role = \"BROKER\"").unwrap();
        assert_eq!(parsed.role, Role::Broker);
    }

    #[test]
    fn test_lead_context_mentions_interest_and_budget() {
        let lead = Lead {
            id: "l1".into(),
            name: "Ana".into(),
            phone: "555-0101".into(),
            email: None,
            status: LeadStatus::Visit,
            source: "Referral".into(),
            interest: Some("Harbor View".into()),
            budget: Some(450_000),
            notes: String::new(),
        };
        let ctx = lead.assistant_context();
        assert!(ctx.contains("Ana"));
        assert!(ctx.contains("Visit scheduled"));
        assert!(ctx.contains("Harbor View"));
        assert!(ctx.contains("450000"));
    }
}
