//! Test fixtures for route-optimizer.
//!
//! Provides real-world coordinates for delivery stops and helpers to turn
//! them into points.

#![allow(dead_code)]

pub mod world_cities;

pub use world_cities::*;
