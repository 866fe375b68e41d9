//! Synthesizes the textual dashboard summary that grounds every answer.

use crate::{
    locale::{Language, Terms},
    widget::{
        DietData, GymData, KanbanColumn, LinkItem, NoteTab, PomodoroState, ReminderItem, TodoItem,
        WellnessData, WidgetContent, WidgetSnapshot, WidgetType,
    },
};
use chrono::{DateTime, NaiveDate};
use std::fmt::Display;

const NOTE_PREVIEW_CHARS: usize = 100;
const GYM_HISTORY_LIMIT: usize = 10;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build the dashboard context for `widgets`, labelled in `language`.
///
/// `today` selects the daily records (water, diet) and is printed in the
/// header. The output depends on nothing else, so identical inputs always
/// produce identical text. Absent data renders as zero or is skipped; this
/// never fails.
#[must_use]
pub fn build_context(widgets: &[WidgetSnapshot], language: Language, today: NaiveDate) -> String {
    let terms = language.terms();
    let today = today.format(DATE_FORMAT).to_string();

    let mut out = ContextWriter::default();
    out.line(0, format_args!("{} ({} {today}):", terms.intro, terms.today_is));

    let empty = WidgetContent::default();
    for widget in widgets {
        out.line(
            0,
            format_args!("- {} \"{}\" ({}):", terms.widget, widget.title, widget.kind),
        );

        let content = widget.content.as_ref().unwrap_or(&empty);
        match widget.kind {
            WidgetType::Todo => {
                write_todos(&mut out, terms, content.todos.as_deref().unwrap_or_default());
            }
            WidgetType::Wellness => {
                write_wellness(&mut out, terms, content.wellness.as_ref(), &today);
            }
            WidgetType::Note => write_notes(
                &mut out,
                terms,
                content.notes.as_deref().unwrap_or_default(),
                content.text.as_deref(),
            ),
            WidgetType::Reminder => write_reminders(
                &mut out,
                terms,
                content.reminders.as_deref().unwrap_or_default(),
            ),
            WidgetType::Kanban => {
                write_kanban(&mut out, terms, content.kanban.as_deref().unwrap_or_default());
            }
            WidgetType::Gym => {
                if let Some(gym) = &content.gym {
                    write_gym(&mut out, terms, gym);
                }
            }
            WidgetType::Links => {
                write_links(&mut out, terms, content.links.as_deref().unwrap_or_default());
            }
            WidgetType::Pomodoro => {
                if let Some(pomodoro) = &content.pomodoro {
                    write_pomodoro(&mut out, terms, pomodoro);
                }
            }
            WidgetType::Diet => {
                if let Some(diet) = &content.diet {
                    write_diet(&mut out, terms, diet, &today);
                }
            }
            WidgetType::AiAssistant | WidgetType::Wiki | WidgetType::Other(_) => {}
        }
    }

    out.finish()
}

#[derive(Default)]
struct ContextWriter {
    buf: String,
}

impl ContextWriter {
    fn line(&mut self, indent: usize, text: impl Display) {
        use std::fmt::Write;

        for _ in 0..indent {
            self.buf.push_str("  ");
        }
        // Writing into a String cannot fail.
        let _ = writeln!(self.buf, "{text}");
    }

    fn finish(self) -> String {
        self.buf
    }
}

fn write_todos(out: &mut ContextWriter, terms: &Terms, todos: &[TodoItem]) {
    let active: Vec<&TodoItem> = todos.iter().filter(|todo| !todo.archived).collect();
    let completed = active.iter().filter(|todo| todo.completed).count();

    out.line(
        1,
        format_args!(
            "{}: {completed}/{} {}.",
            terms.active_list,
            active.len(),
            terms.tasks_completed
        ),
    );

    let pending = active
        .iter()
        .filter(|todo| !todo.completed)
        .map(|todo| todo.text.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    if !pending.is_empty() {
        out.line(1, format_args!("{}: {pending}", terms.pending_tasks));
    }

    let archived = todos.iter().filter(|todo| todo.archived).count();
    if archived > 0 {
        out.line(1, format_args!("({archived} {})", terms.archived_tasks));
    }
}

fn write_wellness(
    out: &mut ContextWriter,
    terms: &Terms,
    wellness: Option<&WellnessData>,
    today: &str,
) {
    let amount = wellness.map_or(0.0, |wellness| {
        wellness
            .history
            .iter()
            .find(|record| record.date == today)
            .map(|record| record.amount)
            .or(wellness.water_intake_ml)
            .unwrap_or(0.0)
    });

    let amount = if amount >= 1000.0 {
        format!("{:.2}L", amount / 1000.0)
    } else {
        format!("{}ml", format_number(amount))
    };

    out.line(1, format_args!("{}: {amount}.", terms.water_consumed));
}

fn write_notes(out: &mut ContextWriter, terms: &Terms, notes: &[NoteTab], legacy: Option<&str>) {
    if !notes.is_empty() {
        for note in notes {
            out.line(
                1,
                format_args!(
                    "{} [{}]: {}...",
                    terms.note,
                    note.title,
                    preview(&note.content)
                ),
            );
        }
    } else if let Some(text) = legacy.filter(|text| !text.is_empty()) {
        out.line(
            1,
            format_args!("{}: {}...", terms.note_content, preview(text)),
        );
    }
}

fn write_reminders(out: &mut ContextWriter, terms: &Terms, reminders: &[ReminderItem]) {
    let upcoming = reminders
        .iter()
        .filter(|reminder| !reminder.completed)
        .map(|reminder| format!("{} {} {}", reminder.text, terms.reminder_on, reminder.date))
        .collect::<Vec<_>>();

    if upcoming.is_empty() {
        out.line(1, format_args!("{}.", terms.no_reminders));
    } else {
        out.line(
            1,
            format_args!("{}: {}", terms.upcoming_reminders, upcoming.join("; ")),
        );
    }
}

fn write_kanban(out: &mut ContextWriter, terms: &Terms, columns: &[KanbanColumn]) {
    for column in columns {
        let items = column
            .items
            .iter()
            .map(|item| item.content.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        if !items.is_empty() {
            out.line(1, format_args!("{} '{}': {items}", terms.column, column.title));
        }
    }
}

fn write_gym(out: &mut ContextWriter, terms: &Terms, gym: &GymData) {
    out.line(1, terms.gym_intro);

    if let Some(session) = &gym.active_session {
        out.line(
            1,
            format_args!("{}: {}", terms.active_workout, session.template_name),
        );
    }

    if !gym.history.is_empty() {
        out.line(1, format_args!("{}:", terms.recent_history));
        for session in gym.history.iter().rev().take(GYM_HISTORY_LIMIT) {
            out.line(
                2,
                format_args!(
                    "- {}: {}",
                    session_date(&session.start_time),
                    session.template_name
                ),
            );
        }
    }

    if !gym.templates.is_empty() {
        out.line(1, format_args!("{}:", terms.available_workouts));
        for template in &gym.templates {
            let exercises = if template.exercises.is_empty() {
                terms.no_exercises.to_string()
            } else {
                template.exercises.join(", ")
            };
            out.line(2, format_args!("- {}: [{exercises}]", template.name));
        }
    }
}

fn write_links(out: &mut ContextWriter, terms: &Terms, links: &[LinkItem]) {
    if links.is_empty() {
        return;
    }

    let links = links
        .iter()
        .map(|link| format!("{} ({})", link.title, link.url))
        .collect::<Vec<_>>()
        .join(", ");
    out.line(1, format_args!("{} {links}", terms.links_intro));
}

fn write_pomodoro(out: &mut ContextWriter, terms: &Terms, pomodoro: &PomodoroState) {
    out.line(1, terms.pomodoro_intro);
    out.line(
        1,
        format_args!(
            "{}: {} ({}s {})",
            terms.pomodoro_mode,
            pomodoro.mode,
            format_number(pomodoro.time_left),
            terms.pomodoro_left
        ),
    );
    out.line(
        1,
        format_args!("{}: {}", terms.pomodoro_cycles, pomodoro.cycles_completed),
    );
    if pomodoro.is_active {
        out.line(1, terms.pomodoro_active);
    }
}

fn write_diet(out: &mut ContextWriter, terms: &Terms, diet: &DietData, today: &str) {
    let foods = diet
        .history
        .iter()
        .find(|log| log.date == today)
        .into_iter()
        .flat_map(|log| &log.meals)
        .flat_map(|meal| &meal.items);

    let (calories, protein) = foods.fold((0.0, 0.0), |(calories, protein), food| {
        (calories + food.calories, protein + food.protein.unwrap_or(0.0))
    });

    out.line(1, terms.diet_intro);
    out.line(
        1,
        format_args!(
            "{}: {} / {}",
            terms.calories_consumed,
            format_number(calories),
            format_number(diet.calorie_goal)
        ),
    );
    out.line(
        1,
        format_args!("{}: {}g", terms.protein_consumed, format_number(protein)),
    );
}

fn preview(text: &str) -> String {
    text.chars().take(NOTE_PREVIEW_CHARS).collect()
}

/// Calendar date of a session start. Falls back to the raw value when it is
/// not an RFC 3339 timestamp.
fn session_date(start_time: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(start_time) {
        return timestamp.date_naive().format(DATE_FORMAT).to_string();
    }
    if let Some(date) = start_time
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, DATE_FORMAT).ok())
    {
        return date.format(DATE_FORMAT).to_string();
    }
    start_time.to_string()
}

/// Integral values print without a fractional part, like the dashboard shows
/// them.
#[allow(clippy::cast_possible_truncation)]
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
