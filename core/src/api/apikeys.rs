use crate::allow_list::{ensure, API_KEY_STATUSES};
use crate::client::{Call, CertCentralClient};
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    ApiKeyStatusRequest, ListApiKeysResponse, NewApiKeyRequest, NewApiKeyResponse,
    ViewApiKeyResponse,
};

impl<T: Transport> CertCentralClient<T> {
    /// Create an API key for `user_id`. The response holds the key itself,
    /// which the service never shows again.
    pub fn new_api_key(&self, user_id: u64, name: &str) -> Result<NewApiKeyResponse, ApiError> {
        let payload = NewApiKeyRequest {
            name: name.to_string(),
        };
        self.fetch(Call::post(format!("key/user/{user_id}")).json(&payload)?)
    }

    pub fn list_api_keys(&self) -> Result<ListApiKeysResponse, ApiError> {
        self.fetch(Call::get("key"))
    }

    /// Set a key to `active` or `revoked`.
    pub fn update_api_key_status(&self, key_id: u64, status: &str) -> Result<(), ApiError> {
        ensure("API key status", API_KEY_STATUSES, status)?;
        let payload = ApiKeyStatusRequest {
            status: status.to_string(),
        };
        self.perform(Call::put(format!("key/{key_id}/status")).json(&payload)?, 204)
    }

    pub fn view_api_key(&self, key_id: u64) -> Result<ViewApiKeyResponse, ApiError> {
        self.fetch(Call::get(format!("key/{key_id}")))
    }
}
