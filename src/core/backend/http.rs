use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use super::{BackendError, ChatBackend, ChatTurn, HealthStatus};
use crate::api::models::{
    AddPersonaRequest, DeletePersonaReply, ErrorBody, HealthPayload, PersonaPayload,
};
use crate::api::{ChatReply, ChatRequest};
use crate::core::constants::REQUEST_TIMEOUT;
use crate::core::message::ChatResponse;
use crate::core::persona::Persona;
use crate::utils::url::{construct_api_url, normalize_base_url};

/// [`ChatBackend`] over HTTP/JSON.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let base_url = normalize_base_url(base_url);
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| BackendError::Transport {
                endpoint: base_url.clone(),
                source,
            })?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, BackendError> {
        let request = self.client.get(construct_api_url(&self.base_url, endpoint));
        self.execute("GET", endpoint, request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: &str,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, BackendError> {
        debug!(method, endpoint, "backend request");
        let result = Self::exchange(endpoint, request).await;
        if let Err(err) = &result {
            error!(method, endpoint, error = %err, "API error");
        }
        result
    }

    async fn exchange<T: DeserializeOwned>(
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, BackendError> {
        let transport = |source| BackendError::Transport {
            endpoint: endpoint.to_string(),
            source,
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::reason);
            return Err(BackendError::Status {
                endpoint: endpoint.to_string(),
                status,
                detail,
            });
        }

        serde_json::from_str(&body).map_err(|source| BackendError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn generate_persona(&self) -> Result<Persona, BackendError> {
        let payload: PersonaPayload = self.get("/generate_persona").await?;
        Ok(payload.into())
    }

    async fn add_custom_persona(&self, description: &str) -> Result<Persona, BackendError> {
        let endpoint = "/add_persona";
        let request = self
            .client
            .post(construct_api_url(&self.base_url, endpoint))
            .json(&AddPersonaRequest { description });
        let payload: PersonaPayload = self.execute("POST", endpoint, request).await?;
        Ok(payload.into())
    }

    async fn send_message(&self, turn: ChatTurn) -> Result<ChatResponse, BackendError> {
        let endpoint = "/chat";
        debug!(session_id = %turn.session_id, mode = %turn.mode, "sending chat turn");
        let body = ChatRequest::new(turn.message, turn.persona, turn.mode);
        let request = self
            .client
            .post(construct_api_url(&self.base_url, endpoint))
            .json(&body);
        let reply: ChatReply = self.execute("POST", endpoint, request).await?;
        Ok(ChatResponse {
            message: reply.response,
            filtered: reply.filtered,
        })
    }

    async fn get_personas(&self) -> Result<Vec<Persona>, BackendError> {
        let payloads: Vec<PersonaPayload> = self.get("/personas").await?;
        Ok(payloads.into_iter().map(Persona::from).collect())
    }

    async fn delete_persona(&self, id: i64) -> Result<String, BackendError> {
        let endpoint = format!("/personas/{id}");
        let request = self
            .client
            .delete(construct_api_url(&self.base_url, &endpoint));
        let reply: DeletePersonaReply = self.execute("DELETE", &endpoint, request).await?;
        Ok(reply.message)
    }

    async fn health(&self) -> Result<HealthStatus, BackendError> {
        let payload: HealthPayload = self.get("/health").await?;
        Ok(HealthStatus {
            status: payload.status,
            chat_configured: payload.groq_configured,
        })
    }
}
