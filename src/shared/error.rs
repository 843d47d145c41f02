use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to tell a partially rendered board apart from
/// a hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested listing was fetched
    Success = 0,
    /// At least one listing could not be fetched; its table was rendered empty
    ListingUnavailable = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config, missing record source, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ListingUnavailable => write!(f, "Listing Unavailable (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failure of a record provider's read call.
///
/// This is the only failure kind a read-through view recognizes. The view
/// records it to its diagnostic sink and otherwise swallows it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("contract call failed (code {code}): {message}")]
    Contract { code: i64, message: String },

    #[error("failed to decode contract response: {0}")]
    Decode(String),

    #[error("failed to read snapshot {path}: {details}")]
    Snapshot { path: PathBuf, details: String },

    #[error("provider panicked: {0}")]
    Panicked(String),
}

/// Application-specific errors surfaced to the user.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the hint line next to each message.
#[derive(Debug, Error)]
pub enum ReliefBoardError {
    #[error("No record source configured\n\n💡 Hint: Pass --snapshot <FILE>, or --rpc-url <URL> together with --contract <ADDRESS> (either on the command line or in relief-board.config.yml)")]
    NoRecordSource,

    #[error("Contract address is required when reading from {rpc_url}\n\n💡 Hint: Pass --contract <ADDRESS> or set 'contract' in the config file")]
    MissingContract { rpc_url: String },

    #[error("Invalid contract address: {address}\nReason: {reason}\n\n💡 Hint: Use a 20-byte hex address such as 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed")]
    InvalidContractAddress { address: String, reason: String },

    #[error("Invalid RPC endpoint: {url}\nReason: {reason}\n\n💡 Hint: Use an http:// or https:// JSON-RPC URL")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for settings and builder inputs
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ListingUnavailable.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ListingUnavailable),
            "Listing Unavailable (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_provider_error_display() {
        let error = ProviderError::Contract {
            code: 3,
            message: "execution reverted".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "contract call failed (code 3): execution reverted"
        );

        let error = ProviderError::Timeout { seconds: 10 };
        assert_eq!(error.to_string(), "request timed out after 10s");
    }

    #[test]
    fn test_no_record_source_display() {
        let display = ReliefBoardError::NoRecordSource.to_string();
        assert!(display.contains("No record source configured"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("--snapshot"));
    }

    #[test]
    fn test_invalid_contract_address_display() {
        let error = ReliefBoardError::InvalidContractAddress {
            address: "0x1234".to_string(),
            reason: "expected 20 bytes, got 2".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid contract address: 0x1234"));
        assert!(display.contains("expected 20 bytes, got 2"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = ReliefBoardError::FileWriteError {
            path: PathBuf::from("/test/board.md"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/board.md"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }
}
