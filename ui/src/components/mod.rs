//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to define common UI elements like badges, cards and navigation links.
pub mod action_link;
pub mod badge;
pub mod empty_state;
pub mod pico;
