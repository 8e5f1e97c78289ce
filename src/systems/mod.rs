//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components, systems,
//! and resources.

pub mod audio;
pub mod collision;
pub mod components;
pub mod enemy;
pub mod input;
pub mod item;
pub mod movement;
pub mod player;
pub mod stage;
