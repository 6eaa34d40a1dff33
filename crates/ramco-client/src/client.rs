//! Application-facing client: one method per RAMCO operation.

use ramco_core::errors::RamcoResult;
use ramco_core::{Outcome, RamcoConfig};

use crate::handler::ResponseHandler;
use crate::request::{AttributeList, AttributeValues, EntityQuery, Request};
use crate::transport::{Caller, HttpTransport, HttpTransportConfig, Transport};

/// The RAMCO API client.
///
/// Each call is synchronous and self-contained: the continuation token and
/// collected pages live on the stack of that call, so one client can serve
/// independent queries from several threads.
#[derive(Debug)]
pub struct RamcoClient<T = HttpTransport> {
    caller: Caller<T>,
    handler: ResponseHandler,
}

impl RamcoClient<HttpTransport> {
    /// Build an HTTP client from resolved configuration. Fails when no
    /// access key is configured or the HTTP client cannot be built.
    pub fn from_config(config: &RamcoConfig) -> RamcoResult<Self> {
        let key = config.require_key()?;
        let transport = HttpTransport::new(HttpTransportConfig::from(&config.api))?;
        tracing::info!(url = transport.url(), "ramco: client ready");
        Ok(Self::with_transport(
            transport,
            key,
            ResponseHandler::from_config(&config.paging),
        ))
    }
}

impl<T: Transport> RamcoClient<T> {
    pub fn with_transport(transport: T, api_key: impl Into<String>, handler: ResponseHandler) -> Self {
        Self {
            caller: Caller::new(transport, api_key),
            handler,
        }
    }

    pub fn caller(&self) -> &Caller<T> {
        &self.caller
    }

    pub fn handler(&self) -> &ResponseHandler {
        &self.handler
    }

    /// Send one request and resolve its reply, following StreamTokens.
    pub fn execute(&self, request: &Request) -> Outcome {
        let query_id = uuid::Uuid::new_v4();
        let span = tracing::info_span!(
            "ramco_query",
            operation = %request.operation(),
            %query_id
        );
        let _enter = span.enter();

        let reply = self.caller.call(request);
        let outcome = self.handler.handle(reply, &self.caller);
        tracing::debug!(
            response_code = outcome.response_code(),
            success = outcome.is_success(),
            "ramco: query finished"
        );
        outcome
    }

    // --- Metadata ---

    /// All entity types in the system.
    pub fn get_entity_types(&self) -> Outcome {
        self.execute(&Request::get_entity_types())
    }

    /// All metadata for one entity, e.g. `Contact`.
    pub fn get_entity_metadata(&self, entity: &str) -> Outcome {
        self.execute(&Request::get_entity_metadata(entity))
    }

    /// Value/label pairs of one OptionSet attribute.
    pub fn get_option_set(&self, entity: &str, attribute: &str) -> Outcome {
        self.execute(&Request::get_option_set(entity, attribute))
    }

    /// Clear the server-side metadata cache.
    pub fn clear_cache(&self) -> Outcome {
        self.execute(&Request::clear_cache())
    }

    // --- Queries ---

    /// Attribute values of the record with `guid`.
    pub fn get_entity(&self, entity: &str, guid: &str, attributes: &AttributeList) -> Outcome {
        self.execute(&Request::get_entity(entity, guid, attributes))
    }

    /// All matching records, every page combined.
    pub fn get_entities(&self, query: &EntityQuery) -> Outcome {
        self.execute(&Request::get_entities(query))
    }

    /// Resume the GetEntities query behind `stream_token`. Later pages are
    /// followed as for any other 206 reply.
    pub fn resume_stream_token(&self, stream_token: &str) -> Outcome {
        self.execute(&Request::resume(stream_token))
    }

    /// Check a username/password pair. A valid pair returns the contact's
    /// GUID; an invalid one comes back as 422 Invalid User.
    pub fn validate_user(&self, username: &str, password: &str) -> Outcome {
        self.execute(&Request::validate_user(username, password))
    }

    // --- Mutations ---

    pub fn update_entity(&self, entity: &str, guid: &str, values: &AttributeValues) -> Outcome {
        self.execute(&Request::update_entity(entity, guid, values))
    }

    pub fn create_entity(&self, entity: &str, values: &AttributeValues) -> Outcome {
        self.execute(&Request::create_entity(entity, values))
    }

    pub fn delete_entity(&self, entity: &str, guid: &str) -> Outcome {
        self.execute(&Request::delete_entity(entity, guid))
    }
}
