pub mod time_sync_data;
pub mod time_sync_estimate;
