pub mod analysis_error;
pub mod data_processor;
pub mod event_record;
pub mod player_roster;
pub mod player_selection;
pub mod player_stats;
pub mod weapon_stats;
