pub mod config;
pub mod domain;
pub mod mail;
pub mod nlp;
pub mod process;
pub mod report;
