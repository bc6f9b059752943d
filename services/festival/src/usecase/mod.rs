pub mod beer;
pub mod catalog;
pub mod rating;
pub mod star;
pub mod user;
