pub mod catalog;
pub mod chat;
pub mod engine;
pub mod history;
pub mod intent;
pub mod render;
