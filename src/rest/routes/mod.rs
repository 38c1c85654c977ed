pub mod guests;
pub mod health;
pub mod pages;
pub mod treats;
