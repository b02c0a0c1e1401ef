// Scripture passages: fetching, HTML extraction and text normalization.

pub mod extract;
pub mod normalize;
pub mod source;
pub mod tables;

pub use source::{BibleGatewayClient, PassageSource};

/// A cleaned passage ready for layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    pub text: String,
    pub reference: String,
    pub version: String,
    pub url: String,
}
