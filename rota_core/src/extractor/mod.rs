// Conversions between solver models and schedule-facing records.
pub mod codec;
pub mod diff;

pub use codec::{model_to_schedule, schedule_to_model};
pub use diff::{apply_diff, diff_models, hamming_distance};
