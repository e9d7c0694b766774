pub mod address;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod health;
pub mod money;
pub mod profile;
pub mod soil;
pub mod tags;
