mod passage_vm;
mod progress_vm;
mod time_fmt;

pub use passage_vm::{map_passage_listing, parse_selection};
pub use progress_vm::{
    AttemptFeedbackVm, ProgressVm, RankingRowVm, map_attempt_feedback, map_progress, map_ranking,
};
pub use time_fmt::format_date;
