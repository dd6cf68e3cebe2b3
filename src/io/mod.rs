//! File output

pub mod html;
