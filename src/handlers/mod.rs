pub mod energy;
pub mod health;
pub mod index;
