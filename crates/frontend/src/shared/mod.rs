pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod fetch_seq;
pub mod list_utils;
pub mod live_updates;
pub mod load_state;
pub mod number_format;
