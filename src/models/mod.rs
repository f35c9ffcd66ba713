pub mod day_data;
pub mod habit;
pub mod habit_type;
pub mod record;
pub mod unit;
