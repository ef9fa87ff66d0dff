pub mod agent;
pub mod event;
pub mod resource;
