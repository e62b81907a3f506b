pub mod delimiter;
pub mod keyword;
