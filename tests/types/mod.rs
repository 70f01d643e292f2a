mod error;
mod messages;
