//! # Request Surface
//!
//! Serializable request/response shapes for every inventory operation and a
//! dispatcher that runs them against a [`PartsClient`].
//!
//! Every failure is recovered here: [`handle`] always produces a
//! [`Response`] whose [`Status`] tells the caller whether the operation
//! succeeded, was rejected as invalid, or addressed a missing part.

pub mod dto;

pub use dto::*;

use crate::clients::{ActorClient, PartsClient};
use crate::inventory::Snapshot;
use tracing::{debug, instrument};

/// Runs one request and reports the outcome.
#[instrument(skip_all)]
pub async fn handle(client: &PartsClient, request: Request) -> Response {
    debug!(?request, "handle called");
    match request {
        Request::Add { part } => {
            let name = part.name.trim().to_string();
            match client.add_part(part).await {
                Ok(id) => Response::success(format!("'{name}' added successfully!"))
                    .with_ids(vec![id]),
                Err(e) => e.into(),
            }
        }
        Request::AddForm { form } => {
            let name = form.name.trim().to_string();
            match client.add_from_form(form).await {
                Ok(id) => Response::success(format!("'{name}' added successfully!"))
                    .with_ids(vec![id]),
                Err(e) => e.into(),
            }
        }
        Request::List => {
            match client.snapshot().await {
                Ok(Snapshot { parts, total }) => {
                    let message = if parts.is_empty() {
                        "No parts in inventory.".to_string()
                    } else {
                        format!("{} parts, total inventory value {}", parts.len(), total)
                    };
                    Response::success(message).with_parts(parts).with_total(total)
                }
                Err(e) => e.into(),
            }
        }
        Request::Total => match client.total_value().await {
            Ok(total) => Response::success(format!("Total inventory value: {total}")).with_total(total),
            Err(e) => e.into(),
        },
        Request::Search { query } => match client.search(&query).await {
            Ok(parts) if parts.is_empty() => {
                Response::new(Status::NotFound, "No matching parts found.").with_parts(parts)
            }
            Ok(parts) => {
                Response::success(format!("{} matching parts", parts.len())).with_parts(parts)
            }
            Err(e) => e.into(),
        },
        Request::Get { part_id } => match client.get(part_id.clone()).await {
            Ok(Some(part)) => Response::success(format!("Found part {part_id}")).with_part(part),
            Ok(None) => Response::new(Status::NotFound, format!("Part not found: {part_id}")),
            Err(e) => e.into(),
        },
        Request::Ids => match client.ids().await {
            Ok(ids) if ids.is_empty() => Response::success("No parts in inventory.").with_ids(ids),
            Ok(ids) => Response::success(format!("{} parts", ids.len())).with_ids(ids),
            Err(e) => e.into(),
        },
        Request::Update { part_id, update } => match client.update_part(part_id, update).await {
            Ok(part) => Response::success("Part updated successfully!").with_part(part),
            Err(e) => e.into(),
        },
        Request::Delete { part_id } => match client.delete(part_id).await {
            Ok(part) => Response::success("Part deleted successfully!").with_part(part),
            Err(e) => e.into(),
        },
    }
}

/// Parses one JSON request line and runs it.
///
/// Malformed input yields a [`Status::Error`] response instead of failing.
pub async fn handle_line(client: &PartsClient, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => handle(client, request).await,
        Err(e) => Response::new(Status::Error, format!("Malformed request: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{Config, InventorySystem};
    use crate::model::{Category, Currency, Money, Part, PartId, PartUpdate};
    use crate::session::mock::{create_mock_client, expect_snapshot};

    fn brake_pad() -> Part {
        Part::new("P1", "Brake Pad", Category::Brakes, 4, 1200.0).with_supplier("ACME")
    }

    #[tokio::test]
    async fn test_add_then_list_reports_total() {
        let system = InventorySystem::new(&Config::default());
        let client = &system.parts_client;

        let added = handle(client, Request::Add { part: brake_pad() }).await;
        assert_eq!(added.status, Status::Success);
        assert_eq!(added.message, "'Brake Pad' added successfully!");

        let listed = handle(client, Request::List).await;
        assert_eq!(listed.status, Status::Success);
        assert_eq!(listed.parts, Some(vec![brake_pad()]));
        assert_eq!(listed.total.unwrap().amount, 4800.0);
        assert!(listed.message.contains("PKR 4,800.00"));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_error_statuses() {
        let system = InventorySystem::new(&Config::default());
        let client = &system.parts_client;

        let missing_name = Part::new("P1", "", Category::Engine, 1, 1.0);
        let rejected = handle(client, Request::Add { part: missing_name }).await;
        assert_eq!(rejected.status, Status::ValidationWarning);
        assert_eq!(rejected.message, "Please enter both Part ID and Part Name.");

        let update = Request::Update {
            part_id: PartId::from("UNKNOWN"),
            update: PartUpdate::quantity(1),
        };
        assert_eq!(handle(client, update).await.status, Status::NotFound);

        let delete = Request::Delete {
            part_id: PartId::from("UNKNOWN"),
        };
        assert_eq!(handle(client, delete).await.status, Status::NotFound);

        let search = handle(client, Request::Search { query: "nonexistent-xyz".into() }).await;
        assert_eq!(search.status, Status::NotFound);
        assert_eq!(search.parts, Some(vec![]));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_handle_line() {
        let system = InventorySystem::new(&Config::default());
        let client = &system.parts_client;

        let line = r#"{"op":"add_form","form":{"part_id":"P7","name":"Headlight","category":"electrical","quantity":"2","price":"950"}}"#;
        let added = handle_line(client, line).await;
        assert_eq!(added.status, Status::Success, "{}", added.message);

        let update = r#"{"op":"update","part_id":"P7","update":{"quantity":10}}"#;
        let updated = handle_line(client, update).await;
        assert_eq!(updated.part.unwrap().quantity, 10);

        let garbage = handle_line(client, "not json").await;
        assert_eq!(garbage.status, Status::Error);
        assert!(garbage.message.starts_with("Malformed request"));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_list_reads_parts_and_total_together() {
        let (session, mut receiver) = create_mock_client(4);
        let client = PartsClient::new(session);

        let task = tokio::spawn(async move { handle(&client, Request::List).await });

        let responder = expect_snapshot(&mut receiver)
            .await
            .expect("Expected Snapshot request");
        let total = Money::new(4800.0, Currency::Pkr);
        responder
            .send(Ok(Snapshot {
                parts: vec![brake_pad()],
                total,
            }))
            .unwrap();

        let listed = task.await.unwrap();
        assert_eq!(listed.status, Status::Success);
        assert_eq!(listed.parts, Some(vec![brake_pad()]));
        assert_eq!(listed.total, Some(total));
        assert!(receiver.try_recv().is_err(), "list should need one request");
    }

    #[test]
    fn test_response_omits_empty_payloads() {
        let json = serde_json::to_string(&Response::success("ok")).unwrap();
        assert_eq!(json, r#"{"status":"success","message":"ok"}"#);
    }
}
