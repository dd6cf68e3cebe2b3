//! Scene document, its builder, and the configuration it is assembled from.

pub mod builder;
pub mod config;
pub mod constants;
pub mod deck;
pub mod environment;
pub mod geo;
