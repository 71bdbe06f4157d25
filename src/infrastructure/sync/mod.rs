pub mod replay_scheduler;

pub use replay_scheduler::InProcessReplayScheduler;
