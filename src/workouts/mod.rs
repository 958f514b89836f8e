// ABOUTME: Workout template catalogue, validated template tokens, and prescription recipes
// ABOUTME: Generators reference templates by token; the enricher expands tokens into segments
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Static template catalogue
pub mod catalogue;
/// Segment recipes and pace zones
pub mod prescription;
/// `category_index` tokens
pub mod token;

pub use catalogue::{WorkoutCatalogue, WorkoutTemplate};
pub use prescription::{PaceZone, Prescribed, Prescription};
pub use token::{TemplateIndex, WorkoutCategory, WorkoutToken};
