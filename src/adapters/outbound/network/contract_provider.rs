use super::abi::{decode_record_array, encode_call, function_selector, AbiError, FieldOrder};
use crate::ports::outbound::{RecordProvider, RecordSource};
use crate::registry::domain::{parse_address, AuthorityRecord, Listing};
use alloy_primitives::hex;
use crate::shared::error::{ProviderError, ReliefBoardError};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Default per-request timeout for the JSON-RPC endpoint
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound for `max_attempts`
pub const MAX_ATTEMPTS_LIMIT: u32 = 10;

/// Connection settings for the registry contract
#[derive(Debug, Clone)]
pub struct ContractSettings {
    pub rpc_url: String,
    pub contract: String,
    pub field_order: FieldOrder,
    pub request_timeout: Duration,
    /// Attempts per fetch for transport failures; 1 disables retrying
    pub max_attempts: u32,
    /// Read method signatures replacing the listing defaults
    pub method_overrides: HashMap<Listing, String>,
}

impl ContractSettings {
    pub fn new(rpc_url: impl Into<String>, contract: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            contract: contract.into(),
            field_order: FieldOrder::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_attempts: 1,
            method_overrides: HashMap::new(),
        }
    }

    /// Read method signature for a listing
    pub fn method_for(&self, listing: Listing) -> &str {
        self.method_overrides
            .get(&listing)
            .map(String::as_str)
            .unwrap_or_else(|| listing.default_method())
    }
}

/// ContractRecordSource adapter - hands out JSON-RPC providers for each listing
///
/// All providers share one HTTP client. The contract address is validated
/// up front and rendered in checksum form.
pub struct ContractRecordSource {
    client: reqwest::Client,
    settings: ContractSettings,
    contract: String,
}

impl ContractRecordSource {
    pub fn new(settings: ContractSettings) -> Result<Self> {
        Self::validate_rpc_url(&settings.rpc_url)?;

        let contract = parse_address(&settings.contract).map_err(|e| {
            ReliefBoardError::InvalidContractAddress {
                address: settings.contract.clone(),
                reason: e.to_string(),
            }
        })?;

        if settings.max_attempts == 0 || settings.max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(ReliefBoardError::Validation {
                message: format!(
                    "max_attempts must be between 1 and {}, got {}",
                    MAX_ATTEMPTS_LIMIT, settings.max_attempts
                ),
            }
            .into());
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("relief-board/{}", version);
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            contract: contract.to_checksum(None),
            settings,
        })
    }

    fn validate_rpc_url(url: &str) -> Result<()> {
        let parsed = reqwest::Url::parse(url).map_err(|e| ReliefBoardError::InvalidRpcUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ReliefBoardError::InvalidRpcUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", other),
            }
            .into()),
        }
    }
}

impl RecordSource for ContractRecordSource {
    fn provider(&self, listing: Listing) -> Result<Arc<dyn RecordProvider>> {
        let method = self.settings.method_for(listing);
        let selector = function_selector(method).map_err(|e| ReliefBoardError::Validation {
            message: format!("{} listing: {}", listing, e),
        })?;

        Ok(Arc::new(ContractRecordProvider {
            client: self.client.clone(),
            rpc_url: self.settings.rpc_url.clone(),
            contract: self.contract.clone(),
            method: method.to_string(),
            call_data: encode_call(selector),
            field_order: self.settings.field_order,
            max_attempts: self.settings.max_attempts,
            timeout_secs: self.settings.request_timeout.as_secs(),
        }))
    }

    fn describe(&self) -> String {
        format!("contract {} via {}", self.contract, self.settings.rpc_url)
    }
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

/// ContractRecordProvider adapter - reads one listing with `eth_call`
///
/// Calls an argument-less view method on the registry contract and decodes the
/// returned struct array. Transport failures are retried up to `max_attempts`;
/// reverts and undecodable responses are not.
pub struct ContractRecordProvider {
    client: reqwest::Client,
    rpc_url: String,
    contract: String,
    method: String,
    call_data: String,
    field_order: FieldOrder,
    max_attempts: u32,
    timeout_secs: u64,
}

impl ContractRecordProvider {
    async fn fetch_with_retry(&self) -> std::result::Result<Vec<u8>, ProviderError> {
        let mut attempt = 1;
        loop {
            match self.eth_call().await {
                Ok(data) => return Ok(data),
                Err(e) if attempt < self.max_attempts && Self::is_transient(&e) => {
                    tracing::warn!(
                        method = %self.method,
                        attempt,
                        error = %e,
                        "eth_call failed, retrying"
                    );
                    tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn is_transient(error: &ProviderError) -> bool {
        matches!(
            error,
            ProviderError::Network(_) | ProviderError::Timeout { .. }
        )
    }

    async fn eth_call(&self) -> std::result::Result<Vec<u8>, ProviderError> {
        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "eth_call",
            "params": [{"to": self.contract, "data": self.call_data}, "latest"],
        });

        tracing::debug!(rpc_url = %self.rpc_url, method = %self.method, "sending eth_call");
        let response = self
            .client
            .post(&self.rpc_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(ProviderError::Network(format!(
                "RPC endpoint returned status code {}",
                response.status()
            )));
        }

        let body: RpcResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(format!("invalid JSON-RPC response: {}", e)))?;

        if let Some(error) = body.error {
            let message = match error.data {
                Some(serde_json::Value::String(data)) => format!("{} ({})", error.message, data),
                _ => error.message,
            };
            return Err(ProviderError::Contract {
                code: error.code,
                message,
            });
        }

        let result = body.result.ok_or_else(|| {
            ProviderError::Decode("JSON-RPC response has neither result nor error".to_string())
        })?;
        let digits = result.strip_prefix("0x").unwrap_or(&result);
        let data = hex::decode(digits)
            .map_err(|e| ProviderError::Decode(format!("result is not hex: {}", e)))?;

        tracing::debug!(method = %self.method, bytes = data.len(), "eth_call returned");
        Ok(data)
    }

    fn transport_error(&self, error: reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            return ProviderError::Timeout {
                seconds: self.timeout_secs,
            };
        }
        let mut message = error.to_string();
        let mut source = std::error::Error::source(&error);
        while let Some(cause) = source {
            message.push_str(&format!(": {}", cause));
            source = cause.source();
        }
        ProviderError::Network(message)
    }
}

#[async_trait]
impl RecordProvider for ContractRecordProvider {
    async fn fetch_all(&self) -> std::result::Result<Vec<AuthorityRecord>, ProviderError> {
        let data = self.fetch_with_retry().await?;
        decode_record_array(&data, self.field_order).map_err(|e| match e {
            AbiError::Empty => ProviderError::Decode(format!(
                "{} returned no data; is the registry deployed at {}?",
                self.method, self.contract
            )),
            other => ProviderError::Decode(other.to_string()),
        })
    }
}
