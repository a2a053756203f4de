mod normal_mode;
mod search;
mod suggest_modal;

pub use normal_mode::handle_normal_mode;
pub use search::handle_search_mode;
pub use suggest_modal::handle_suggest_mode;
