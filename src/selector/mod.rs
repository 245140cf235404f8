//! Question-candidate selection
//!
//! This module provides the two scoring stages that turn tagged sentences
//! into fill-in-the-blank material: sentence selection and keyword choice.

pub mod frequency;
pub mod keyword;
pub mod sentence;
