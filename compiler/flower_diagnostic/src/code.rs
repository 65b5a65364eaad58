use std::fmt;

/// Codes for all mapper diagnostics.
///
/// Format: W#### where the first digit indicates the phase that reports it:
/// - W1xxx: symbol-table construction
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum DiagnosticCode {
    /// A target file belongs to the implicit standard library
    W1001,
    /// A library declaration has no resolvable symbol
    W1002,
    /// A type/value rename and a library rule apply to the same symbol
    W1003,
    /// Declaration shape inside a global augmentation is not handled yet
    W1004,
    /// Namespace in the standard library skipped
    W1005,
    /// Target file is not part of the program
    W1006,
}

impl DiagnosticCode {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::W1001 => "W1001",
            DiagnosticCode::W1002 => "W1002",
            DiagnosticCode::W1003 => "W1003",
            DiagnosticCode::W1004 => "W1004",
            DiagnosticCode::W1005 => "W1005",
            DiagnosticCode::W1006 => "W1006",
        }
    }

    /// One-line description, for `--explain`-style listings.
    pub fn description(self) -> &'static str {
        match self {
            DiagnosticCode::W1001 => "target file is part of the implicit standard library",
            DiagnosticCode::W1002 => "library declaration has no resolvable symbol",
            DiagnosticCode::W1003 => "type/value rename overrides a library rewrite rule",
            DiagnosticCode::W1004 => "unsupported declaration in global augmentation",
            DiagnosticCode::W1005 => "standard-library namespace not scanned for rewrites",
            DiagnosticCode::W1006 => "target file is not part of the program",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
