pub mod d400_admin_statistics;
pub mod d401_automation_stats;
pub mod d402_automation_analytics;
