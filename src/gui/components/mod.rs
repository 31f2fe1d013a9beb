// src/gui/components/mod.rs
pub mod body;
pub mod edit_panel;
pub mod provider_cards;
pub mod provider_table;
pub mod status_bar;
pub mod tabs;
pub mod toolbar;
