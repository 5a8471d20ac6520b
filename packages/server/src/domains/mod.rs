// Business domains
pub mod answer;
pub mod parser;
