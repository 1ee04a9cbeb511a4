//! gridsnake - terminal snake on a numbered grid, with food that can
//! reverse the snake's direction of travel.
//!
//! The simulation core lives in [`engine`], built on:
//! - [`board`] - the coordinate -> cell-id grid
//! - [`direction`] - direction arithmetic and key decoding
//! - [`snake`] - the segment chain and its occupied-cell set
//! - [`food`] - rejection-sampled food placement
//!
//! [`app`] is the terminal host driving ticks and drawing.

pub mod app;
pub mod board;
pub mod direction;
pub mod engine;
pub mod food;
pub mod snake;
