mod chat;
mod movie;

pub use chat::ChatTurn;
pub use movie::{CatalogMovie, CatalogPage, UNKNOWN_TITLE};
