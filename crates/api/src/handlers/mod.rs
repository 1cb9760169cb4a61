pub mod artist;
pub mod genre;
