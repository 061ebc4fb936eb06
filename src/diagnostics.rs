// ABOUTME: Diagnostics accumulator for transient failures recovered while waiting.
// ABOUTME: Collects warnings that did not fail the run but are worth summarizing.

/// Collects non-fatal warnings during a wait.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning. The wait loop logs it where the failure is recovered.
    pub fn record(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Number of warnings of the given kind.
    pub fn count(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }

    /// One-line breakdown by kind, e.g. `3 transient failure(s): 2 HTTP status, 1 transport`.
    pub fn summary(&self) -> Option<String> {
        if !self.has_warnings() {
            return None;
        }
        let parts: Vec<String> = WarningKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|(_, n)| *n > 0)
            .map(|(kind, n)| format!("{n} {}", kind.label()))
            .collect();
        Some(format!(
            "{} transient failure(s): {}",
            self.warnings.len(),
            parts.join(", ")
        ))
    }
}

/// A recovered transient failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// The server answered with a non-2xx status.
    pub fn http_status(status: u16) -> Self {
        Self {
            kind: WarningKind::HttpStatus,
            message: format!("HTTP error, status {status}"),
        }
    }

    /// No response was received.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::Transport,
            message: message.into(),
        }
    }

    /// The body carried an error object that does not end the run.
    pub fn api_error(code: Option<&str>, message: Option<&str>) -> Self {
        Self {
            kind: WarningKind::ApiError,
            message: format!(
                "API error {}: {}",
                code.unwrap_or("unknown"),
                message.unwrap_or("no message")
            ),
        }
    }

    /// The body could not be decoded into the expected shape.
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::MalformedResponse,
            message: format!("malformed response: {}", message.into()),
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Categories of recoverable failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// Non-2xx HTTP status.
    HttpStatus,
    /// Connection or body read failure.
    Transport,
    /// Error object other than `forbidden`.
    ApiError,
    /// JSON that did not match the expected response shape.
    MalformedResponse,
}

impl WarningKind {
    pub const ALL: [WarningKind; 4] = [
        WarningKind::HttpStatus,
        WarningKind::Transport,
        WarningKind::ApiError,
        WarningKind::MalformedResponse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WarningKind::HttpStatus => "HTTP status",
            WarningKind::Transport => "transport",
            WarningKind::ApiError => "API error",
            WarningKind::MalformedResponse => "malformed response",
        }
    }
}
