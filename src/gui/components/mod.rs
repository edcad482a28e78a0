// src/gui/components/mod.rs
pub mod ack;
pub mod action_buttons;
pub mod checklist;
pub mod panel;
pub mod status_bar;
pub mod summary;
