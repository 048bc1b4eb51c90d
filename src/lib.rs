pub mod core;
pub mod form;
pub mod game;
pub mod gui;
pub mod persistence;
