pub mod scorer;
pub mod validator;

pub use scorer::score;
pub use validator::validate;
