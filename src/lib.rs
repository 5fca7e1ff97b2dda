//! AIHE Engine - Assessment scoring for the AIHE AI-maturity framework
//!
//! Turns 16 subdimension ratings and an organisational context into
//! context-weighted maturity metrics (RGI, EQI, SI, SBS), an archetype
//! classification and prioritized gap recommendations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
