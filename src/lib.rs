//! EagleWings - Drone Command Chatbot
//!
//! This crate interprets chat messages as drone commands and identity
//! questions, answering from a user store and a face-detection subsystem
//! and forwarding movement directives to the drone link.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
