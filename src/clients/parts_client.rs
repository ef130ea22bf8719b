//! # Parts Client
//!
//! Provides a high‑level API for interacting with the inventory session.
//! It wraps a `SessionClient` and exposes domain‑specific methods that
//! return [`PartError`] directly.
use crate::clients::actor_client::ActorClient;
use crate::inventory::{PartError, Snapshot};
use crate::model::{Money, Part, PartForm, PartId, PartUpdate};
use crate::session::{FrameworkError, SessionClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the inventory session.
#[derive(Clone)]
pub struct PartsClient {
    inner: SessionClient,
}

impl PartsClient {
    pub fn new(inner: SessionClient) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient for PartsClient {
    type Error = PartError;

    fn inner(&self) -> &SessionClient {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Inventory(e) => e,
            other => PartError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl PartsClient {
    #[instrument(skip(self, part), fields(part_id = %part.part_id))]
    pub async fn add_part(&self, part: Part) -> Result<PartId, PartError> {
        debug!(?part, "add_part called");
        self.inner.add(part).await.map_err(Self::map_error)
    }

    /// Parses a text form and adds the resulting part.
    ///
    /// Parse failures are reported without contacting the actor.
    #[instrument(skip(self, form))]
    pub async fn add_from_form(&self, form: PartForm) -> Result<PartId, PartError> {
        let part = Part::try_from(form)?;
        self.add_part(part).await
    }

    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Part>, PartError> {
        debug!("Sending request");
        self.inner
            .search(query.to_string())
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn total_value(&self) -> Result<Money, PartError> {
        debug!("Sending request");
        self.inner.total().await.map_err(Self::map_error)
    }

    /// Every part and their total value, read together.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<Snapshot, PartError> {
        debug!("Sending request");
        self.inner.snapshot().await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_part(&self, id: PartId, update: PartUpdate) -> Result<Part, PartError> {
        debug!(?update, "update_part called");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::session::mock::{create_mock_client, expect_add, expect_search, expect_update};

    #[tokio::test]
    async fn test_domain_error_is_unwrapped() {
        let (client, mut receiver) = create_mock_client(10);
        let parts_client = PartsClient::new(client);

        let task = tokio::spawn(async move {
            parts_client
                .update_part(PartId::from("UNKNOWN"), PartUpdate::quantity(1))
                .await
        });

        let (id, update, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, PartId::from("UNKNOWN"));
        assert_eq!(update.quantity, Some(1));
        responder
            .send(Err(FrameworkError::Inventory(PartError::NotFound("UNKNOWN".into()))))
            .unwrap();

        assert_eq!(task.await.unwrap(), Err(PartError::NotFound("UNKNOWN".into())));
    }

    #[tokio::test]
    async fn test_channel_failure_maps_to_communication_error() {
        let (client, mut receiver) = create_mock_client(10);
        let parts_client = PartsClient::new(client);

        let task = tokio::spawn(async move { parts_client.search("brake").await });

        let (query, responder) = expect_search(&mut receiver)
            .await
            .expect("Expected Search request");
        assert_eq!(query, "brake");
        drop(responder);

        match task.await.unwrap() {
            Err(PartError::ActorCommunicationError(msg)) => {
                assert!(msg.contains("dropped response channel"))
            }
            other => panic!("Expected ActorCommunicationError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_add_from_form_parses_before_sending() {
        let (client, mut receiver) = create_mock_client(10);
        let parts_client = PartsClient::new(client);

        let bad = PartForm {
            part_id: "P1".into(),
            name: "Clutch Plate".into(),
            quantity: "lots".into(),
            ..PartForm::default()
        };
        let result = parts_client.add_from_form(bad).await;
        assert!(matches!(result, Err(PartError::InvalidNumber { field: "quantity", .. })));
        assert!(receiver.try_recv().is_err(), "nothing should reach the actor");

        let good = PartForm {
            part_id: "P1".into(),
            name: "Clutch Plate".into(),
            category: "engine".into(),
            quantity: "3".into(),
            price: "850".into(),
            ..PartForm::default()
        };
        let task = tokio::spawn(async move { parts_client.add_from_form(good).await });
        let (part, responder) = expect_add(&mut receiver).await.expect("Expected Add request");
        assert_eq!(part.category, Category::Engine);
        assert_eq!(part.quantity, 3);
        responder.send(Ok(part.part_id)).unwrap();
        assert_eq!(task.await.unwrap(), Ok(PartId::from("P1")));
    }
}
