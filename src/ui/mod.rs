pub mod app;
pub mod carousel;
pub mod catalog;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod store;
pub mod terminal_guard;
pub mod theme;
pub mod worker;
