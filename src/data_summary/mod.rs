pub mod data_summarizer;
pub mod player_stats_summary;
pub mod stats_report;
