//! Order gateway.

use async_trait::async_trait;
use bengol::checkout::OrderRequest;
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Failures while handing an order to the backend.
#[derive(Debug, Error)]
pub enum OrderGatewayError {
    /// The request never completed; the user may simply retry.
    #[error("failed to reach the order endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered but refused the order.
    #[error("{0}")]
    Rejected(String),
}

/// Hands a validated order payload to whatever persists it.
#[automock]
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit an order and return the generated order id.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderGatewayError`] on transport failure or rejection.
    async fn create_order(&self, order: &OrderRequest) -> Result<String, OrderGatewayError>;
}

/// HTTP gateway posting orders to the JSON API.
#[derive(Debug, Clone)]
pub struct HttpOrderGateway {
    endpoint: String,
    http: Client,
}

impl HttpOrderGateway {
    /// Create a gateway for the given order-creation endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }
}

/// Wire response of the order-creation endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderReceipt {
    success: bool,
    #[serde(default)]
    order_id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn create_order(&self, order: &OrderRequest) -> Result<String, OrderGatewayError> {
        let response = self.http.post(&self.endpoint).json(order).send().await?;

        let status = response.status();
        let receipt: OrderReceipt = match response.json().await {
            Ok(receipt) => receipt,
            Err(_) => {
                return Err(OrderGatewayError::Rejected(format!(
                    "order endpoint returned status {status} with an unreadable body"
                )));
            }
        };

        if receipt.success {
            receipt
                .order_id
                .ok_or_else(|| OrderGatewayError::Rejected("response is missing orderId".to_string()))
        } else {
            Err(OrderGatewayError::Rejected(
                receipt.error.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }
}
