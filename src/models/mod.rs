pub mod action;
pub mod alert;
pub mod company;
pub mod price;
