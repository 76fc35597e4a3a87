mod component;
/// Topic rules and canned answers.
pub mod matcher;

pub use component::MentorChat;
pub use matcher::{Reply, Topic, classify, respond};
