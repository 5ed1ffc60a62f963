pub mod error;
pub mod sign_in;
