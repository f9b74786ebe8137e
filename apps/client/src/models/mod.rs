pub mod question;
pub mod result;
pub mod setup;
pub mod submission;
