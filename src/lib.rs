//! Grid snake: a turn-based snake engine with a terminal frontend.
//!
//! The engine ([`board`], [`snake`], [`food`], [`game`]) is pure and
//! synchronous; the driving loop owns a [`game::Session`], feeds it
//! [`input::GameInput`] values and calls [`game::Session::tick`] once per
//! fixed interval. The remaining modules draw [`game::Snapshot`]s in a
//! terminal.

pub mod board;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
