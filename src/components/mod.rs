pub mod app;
pub mod output_panel;
pub mod planet_slot;
pub mod wheel_view;
