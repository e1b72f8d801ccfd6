//! Generic CRUD controller shared by every resource kind.
//!
//! The controller parses raw path identifiers and request bodies, runs the
//! injected [`Validator`] over the whole payload, and delegates to the
//! [`ResourceStore`] port. Every failure becomes a domain [`Error`]; the
//! controller never writes before parsing and validation have passed.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::ports::{ResourceStore, ResourceStoreError};
use crate::domain::{Error, Record, ResourceFields, ResourceId, Validator};

/// List, get, create, update and delete for one resource kind.
pub struct ResourceController<F: ResourceFields> {
    store: Arc<dyn ResourceStore<F>>,
    validator: Arc<Validator>,
}

impl<F: ResourceFields> Clone for ResourceController<F> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            validator: Arc::clone(&self.validator),
        }
    }
}

impl<F: ResourceFields> ResourceController<F> {
    /// Create a controller over the given store and shared validator.
    pub fn new(store: Arc<dyn ResourceStore<F>>, validator: Arc<Validator>) -> Self {
        Self { store, validator }
    }

    /// Every record of this kind. An empty store yields an empty list.
    pub async fn list(&self) -> Result<Vec<Record<F>>, Error> {
        self.store.list().await.map_err(Self::map_store_error)
    }

    /// Fetch one record by its raw path identifier.
    pub async fn get(&self, raw_id: &str) -> Result<Record<F>, Error> {
        let id = Self::parse_id(raw_id)?;
        self.store.get(id).await.map_err(Self::map_store_error)
    }

    /// Parse, validate and persist a new record.
    pub async fn create(&self, body: &[u8]) -> Result<Record<F>, Error> {
        let fields = self.accept(body)?;
        self.store
            .create(fields)
            .await
            .map_err(Self::map_store_error)
    }

    /// Replace every editable field of an existing record.
    ///
    /// The identifier is checked before the body so a malformed id reports
    /// not found even when the payload is also bad.
    pub async fn update(&self, raw_id: &str, body: &[u8]) -> Result<Record<F>, Error> {
        let id = Self::parse_id(raw_id)?;
        let fields = self.accept(body)?;
        self.store
            .update(id, fields)
            .await
            .map_err(Self::map_store_error)
    }

    /// Remove a record. A second delete of the same id reports not found.
    pub async fn delete(&self, raw_id: &str) -> Result<(), Error> {
        let id = Self::parse_id(raw_id)?;
        self.store.delete(id).await.map_err(Self::map_store_error)
    }

    fn accept(&self, body: &[u8]) -> Result<F, Error> {
        let value: Value = serde_json::from_slice(body).map_err(Self::malformed)?;
        if !value.is_object() {
            return Err(Self::malformed("expected a JSON object"));
        }
        let fields = F::deserialize(value).map_err(Self::malformed)?;

        let violations = self.validator.validate(&fields.checks());
        if violations.is_empty() {
            Ok(fields)
        } else {
            Err(Error::validation(violations))
        }
    }

    fn malformed(reason: impl ToString) -> Error {
        Error::invalid_request(format!("invalid {} payload", F::KIND.singular))
            .with_details(json!({ "reason": reason.to_string() }))
    }

    fn parse_id(raw: &str) -> Result<ResourceId, Error> {
        ResourceId::parse(raw).ok_or_else(|| Error::not_found(F::KIND.not_found_message()))
    }

    fn map_store_error(error: ResourceStoreError) -> Error {
        match error {
            ResourceStoreError::NotFound { id } => Error::not_found(F::KIND.not_found_message())
                .with_details(json!({ "id": id.to_string() })),
            ResourceStoreError::Unavailable { message } => Error::internal(format!(
                "{} store unavailable: {message}",
                F::KIND.singular
            )),
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
