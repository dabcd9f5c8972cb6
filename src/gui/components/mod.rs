// GUI Components module
mod game_card;
mod header;
mod search_bar;
mod status_bar;

pub use game_card::GameCard;
pub use header::{Header, HeaderEvents};
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
