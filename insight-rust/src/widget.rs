//! Read-only snapshots of dashboard widgets as they are persisted.
//!
//! Every content field is optional and defaults when absent, so snapshots
//! written by older versions of the dashboard still deserialize.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a dashboard widget. Unknown tags are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WidgetType {
    Todo,
    Note,
    Wellness,
    Reminder,
    Kanban,
    Gym,
    Links,
    Pomodoro,
    Diet,
    AiAssistant,
    Wiki,
    Other(String),
}

impl WidgetType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Todo => "TODO",
            Self::Note => "NOTE",
            Self::Wellness => "WELLNESS",
            Self::Reminder => "REMINDER",
            Self::Kanban => "KANBAN",
            Self::Gym => "GYM",
            Self::Links => "LINKS",
            Self::Pomodoro => "POMODORO",
            Self::Diet => "DIET",
            Self::AiAssistant => "AI_ASSISTANT",
            Self::Wiki => "WIKI",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for WidgetType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "TODO" => Self::Todo,
            "NOTE" => Self::Note,
            "WELLNESS" => Self::Wellness,
            "REMINDER" => Self::Reminder,
            "KANBAN" => Self::Kanban,
            "GYM" => Self::Gym,
            "LINKS" => Self::Links,
            "POMODORO" => Self::Pomodoro,
            "DIET" => Self::Diet,
            "AI_ASSISTANT" => Self::AiAssistant,
            "WIKI" => Self::Wiki,
            _ => Self::Other(tag),
        }
    }
}

impl From<WidgetType> for String {
    fn from(kind: WidgetType) -> Self {
        match kind {
            WidgetType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A point-in-time view of one dashboard widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSnapshot {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: WidgetType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<WidgetContent>,
}

impl WidgetSnapshot {
    pub fn new(
        id: impl Into<String>,
        kind: WidgetType,
        title: impl Into<String>,
        content: WidgetContent,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            content: Some(content),
        }
    }
}

/// Type specific payload. Only the fields matching the widget type are
/// expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetContent {
    pub todos: Option<Vec<TodoItem>>,
    /// Single note body from before notes had tabs.
    pub text: Option<String>,
    pub notes: Option<Vec<NoteTab>>,
    pub wellness: Option<WellnessData>,
    pub reminders: Option<Vec<ReminderItem>>,
    pub kanban: Option<Vec<KanbanColumn>>,
    pub gym: Option<GymData>,
    pub links: Option<Vec<LinkItem>>,
    pub pomodoro: Option<PomodoroState>,
    pub diet: Option<DietData>,
    pub wiki: Option<WikiData>,
    pub chat_history: Option<Vec<crate::ChatMessage>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub archived: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoteTab {
    pub id: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WellnessData {
    /// Intake counter from before daily history was kept.
    pub water_intake_ml: Option<f64>,
    pub history: Vec<WaterRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaterRecord {
    /// `YYYY-MM-DD`
    pub date: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReminderItem {
    pub id: String,
    pub text: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KanbanColumn {
    pub id: String,
    pub title: String,
    pub items: Vec<KanbanItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KanbanItem {
    pub id: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GymData {
    pub templates: Vec<GymTemplate>,
    /// Finished sessions, oldest first.
    pub history: Vec<GymSession>,
    pub active_session: Option<GymSession>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GymTemplate {
    pub id: String,
    pub name: String,
    pub exercises: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GymSession {
    pub id: String,
    pub template_name: String,
    /// RFC 3339 timestamp.
    pub start_time: String,
    pub end_time: Option<String>,
    pub logs: Vec<GymExerciseLog>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GymExerciseLog {
    pub exercise_name: String,
    pub sets: Vec<GymSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GymSet {
    pub id: String,
    pub reps: String,
    pub weight: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkItem {
    pub id: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PomodoroState {
    /// `work`, `shortBreak` or `longBreak`.
    pub mode: String,
    /// Remaining seconds when the timer was last paused or saved.
    pub time_left: f64,
    pub is_active: bool,
    pub cycles_completed: u32,
    /// Epoch milliseconds at which a running timer ends.
    pub end_time: Option<i64>,
}

impl Default for PomodoroState {
    fn default() -> Self {
        Self {
            mode: "work".to_string(),
            time_left: 1500.0,
            is_active: false,
            cycles_completed: 0,
            end_time: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietData {
    pub calorie_goal: f64,
    pub history: Vec<DietDayLog>,
}

impl Default for DietData {
    fn default() -> Self {
        Self {
            calorie_goal: 2000.0,
            history: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietDayLog {
    /// `YYYY-MM-DD`
    pub date: String,
    pub meals: Vec<DietMeal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietMeal {
    pub id: String,
    pub name: String,
    pub items: Vec<DietFood>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DietFood {
    pub id: String,
    pub name: String,
    pub calories: f64,
    pub protein: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WikiData {
    pub pages: Vec<WikiPage>,
    pub active_page_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WikiPage {
    pub id: String,
    pub title: String,
    pub content: String,
    pub is_public: bool,
    pub public_id: Option<String>,
}
