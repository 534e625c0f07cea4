pub mod components;
pub mod view;
