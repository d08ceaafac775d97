//! Sweep module - repeating timer and the moving window it drives

mod scheduler;
mod ticker;

pub use scheduler::{SchedulerState, WindowScheduler};
pub use ticker::RepeatingTask;
