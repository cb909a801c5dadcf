pub mod credential;
pub mod merkle;
pub mod token;

pub use credential::*;
pub use merkle::*;
pub use token::*;
