pub mod api;
pub mod controls;
pub mod dto;
pub mod model;
pub mod state;
pub mod view;
