use crate::models::habit::Habit;
use crate::models::habit_type::HabitType;

/// Habits of the given type (all when `None`) whose name or tags contain
/// `query`, case-insensitively. Order is preserved.
pub fn filter_habits(habits: &[Habit], kind: Option<HabitType>, query: Option<&str>) -> Vec<Habit> {
    habits
        .iter()
        .filter(|h| kind.is_none_or(|k| h.kind == k))
        .filter(|h| query.is_none_or(|q| h.matches_query(q)))
        .cloned()
        .collect()
}
