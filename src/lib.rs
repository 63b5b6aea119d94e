//! Rule-based symptom triage: keyword matching over tagged noun phrases,
//! canned category replies, and a sentiment-driven empathy prefix.

pub mod chatbot;
pub mod config;
pub mod console;
pub mod error;
pub mod http;
pub mod matcher;
pub mod nlp;
pub mod responder;
pub mod tables;

pub use chatbot::TriageBot;
pub use tables::Category;
