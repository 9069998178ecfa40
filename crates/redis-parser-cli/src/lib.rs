//! Command-line front end for the `redis-parser` codec.
//!
//! `redis-parser decode` reads one server reply and prints its kind and
//! value; `redis-parser encode` turns words into a command frame.

pub mod command;
pub mod config;
pub mod render;
