// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Serialize;
use tripmate_core::{HealthStatus, TripmateError};

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), TripmateError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| TripmateError::Internal(format!("failed to encode output: {e}")))?;
    println!("{text}");
    Ok(())
}

/// One-line summary of an adapter health check.
pub fn describe_health(status: &HealthStatus) -> String {
    match status {
        HealthStatus::Healthy => "healthy".to_string(),
        HealthStatus::Degraded(reason) => format!("degraded ({reason})"),
        HealthStatus::Unhealthy(reason) => format!("unhealthy ({reason})"),
    }
}
