pub mod portfolio;
pub mod position;
pub mod price;
