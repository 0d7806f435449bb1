pub mod basket;
pub mod error;
pub mod health;
pub mod security;
pub mod tags;
