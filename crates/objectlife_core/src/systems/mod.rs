pub mod biological;
pub mod ecological;
pub mod movement;
pub mod steering;
