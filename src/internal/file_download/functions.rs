pub mod compute_progress;

pub use compute_progress::compute_progress;
