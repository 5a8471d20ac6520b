// GrandPy Bot - Core
//
// Answers "where is X" questions asked in French: the question is parsed down
// to a place name, geocoded, and paired with a nearby Wikipedia article.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
