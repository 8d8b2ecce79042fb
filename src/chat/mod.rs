pub mod responder;
pub mod transcript;
