use anyhow::Result;

use crate::external::ToolOutput;

/// Declared failure tolerance for one external source, evaluated uniformly
/// by the stage runners instead of per-tool special cases.
#[derive(Debug, Clone, Copy)]
pub struct SourcePolicy {
    /// A run failure aborts the whole stage.
    pub must_succeed: bool,
    /// On nonzero exit, stdout is still parsed for partial results.
    pub use_partial_on_failure: bool,
}

impl SourcePolicy {
    /// Failure contributes an empty result; partial stdout is discarded.
    pub const EMPTY_ON_FAILURE: Self = Self {
        must_succeed: false,
        use_partial_on_failure: false,
    };

    /// Failure contributes whatever could still be parsed from stdout.
    pub const PARTIAL_ON_FAILURE: Self = Self {
        must_succeed: false,
        use_partial_on_failure: true,
    };
}

/// Apply a source's policy to its invocation result. `Ok(Some(out))` means
/// stdout should be parsed; `Ok(None)` means the source contributes
/// nothing; `Err` aborts the stage (only for `must_succeed` sources).
pub fn evaluate_source(
    name: &str,
    policy: SourcePolicy,
    result: Result<ToolOutput>,
) -> Result<Option<ToolOutput>> {
    match result {
        Ok(out) if out.success() => Ok(Some(out)),
        Ok(out) if policy.use_partial_on_failure => {
            tracing::warn!(
                "{} exited with {}, keeping partial stdout: {}",
                name,
                out.exit_code,
                excerpt(&out.stderr)
            );
            Ok(Some(out))
        }
        Ok(out) => {
            tracing::warn!(
                "{} exited with {}, contributing nothing: {}",
                name,
                out.exit_code,
                excerpt(&out.stderr)
            );
            Ok(None)
        }
        Err(e) if policy.must_succeed => Err(e),
        Err(e) => {
            tracing::warn!("{} could not be run, contributing nothing: {:#}", name, e);
            Ok(None)
        }
    }
}

fn excerpt(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.chars().count() > 200 {
        let head: String = trimmed.chars().take(200).collect();
        format!("{head}...")
    } else {
        trimmed.to_string()
    }
}
