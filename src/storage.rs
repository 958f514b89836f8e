// ABOUTME: Storage-constraint checks applied before a plan is handed to the persistence layer
// ABOUTME: Rejects empty weeks and documents above the store's per-document size limit
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::fs;
use std::io::Write;
use std::path::Path;
use stride_core::errors::{AppError, AppResult};
use tracing::{debug, info};

use crate::generation::GeneratedPlan;

/// Check that `plan` can be stored, returning its serialized size in bytes
///
/// # Errors
///
/// Returns `PersistenceConstraint` if any week has no workouts or the JSON
/// document exceeds `max_document_bytes`, and `SerializationError` if the plan
/// cannot be serialized.
pub fn validate_for_storage(plan: &GeneratedPlan, max_document_bytes: usize) -> AppResult<usize> {
    if plan.weeks.is_empty() {
        return Err(AppError::persistence("Plan has no weeks"));
    }
    if let Some(week) = plan.weeks.iter().find(|w| w.workouts.is_empty()) {
        return Err(
            AppError::persistence(format!("Week {} has no workouts", week.week_number))
                .with_details(serde_json::json!({ "week_number": week.week_number })),
        );
    }

    let size = serde_json::to_vec(plan)?.len();
    if size > max_document_bytes {
        return Err(AppError::persistence(format!(
            "Plan document is {size} bytes, limit is {max_document_bytes}"
        ))
        .with_details(serde_json::json!({
            "size_bytes": size,
            "limit_bytes": max_document_bytes,
        })));
    }
    debug!(size_bytes = size, limit_bytes = max_document_bytes, "plan fits storage limits");
    Ok(size)
}

/// Validate and write `plan` as pretty JSON to `writer`
///
/// # Errors
///
/// Returns the validation error, or `InternalError` if writing fails
pub fn write_plan<W: Write>(
    plan: &GeneratedPlan,
    max_document_bytes: usize,
    mut writer: W,
) -> AppResult<()> {
    validate_for_storage(plan, max_document_bytes)?;
    serde_json::to_writer_pretty(&mut writer, plan)?;
    writeln!(writer)
        .and_then(|()| writer.flush())
        .map_err(|e| AppError::internal(format!("Failed to write plan: {e}")).with_source(e))
}

/// Validate and save `plan` to `path`
///
/// # Errors
///
/// Returns the validation error, or `InternalError` if the file cannot be written
pub fn save_plan(plan: &GeneratedPlan, max_document_bytes: usize, path: &Path) -> AppResult<()> {
    let file = fs::File::create(path).map_err(|e| {
        AppError::internal(format!("Failed to create {}: {e}", path.display())).with_source(e)
    })?;
    write_plan(plan, max_document_bytes, file)?;
    info!(path = %path.display(), "plan document saved");
    Ok(())
}
