pub mod role_stats;
pub mod win_rate;
