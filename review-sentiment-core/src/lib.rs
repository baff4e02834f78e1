pub mod config;
pub mod database;
pub mod entity;
pub mod lexicon;
pub mod sentiment;
