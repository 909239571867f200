//! Bias Lab - Cognitive Bias Experiment Engine
//!
//! This crate implements the flow controllers, session state, and scoring
//! engines for a suite of interactive psychological experiments (anchoring,
//! confirmation, framing). The presentation layer is an external
//! collaborator: it feeds user actions into [`application::Simulator`] and
//! renders the stage and state the controller returns.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
