//! Scripted collection source for exercising the aggregator without a network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::oneshot;

use crate::systems::remote::{CollectionSource, RemoteError};
use crate::types::{Collection, CollectionHits, ItemSummary, SellerSummary};

type Reply = Result<CollectionHits, RemoteError>;

/// Answers unscripted queries with no rows; gated queries wait for the test
/// to release them, which lets tests choose the completion order.
#[derive(Default)]
pub(crate) struct ScriptedSource {
	gates: Mutex<HashMap<(Collection, String), oneshot::Receiver<Reply>>>,
	calls: Mutex<Vec<(Collection, String, usize)>>,
}

pub(crate) struct Gate(oneshot::Sender<Reply>);

impl Gate {
	pub(crate) fn release(self, reply: Reply) {
		let _ = self.0.send(reply);
	}
}

impl ScriptedSource {
	pub(crate) fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub(crate) fn gate(&self, collection: Collection, text: &str) -> Gate {
		let (tx, rx) = oneshot::channel();
		self.gates
			.lock()
			.unwrap()
			.insert((collection, text.to_string()), rx);
		Gate(tx)
	}

	pub(crate) fn calls(&self) -> Vec<(Collection, String, usize)> {
		self.calls.lock().unwrap().clone()
	}
}

#[async_trait]
impl CollectionSource for ScriptedSource {
	async fn fetch(&self, collection: Collection, text: &str, limit: usize) -> Reply {
		self.calls
			.lock()
			.unwrap()
			.push((collection, text.to_string(), limit));
		let gate = self
			.gates
			.lock()
			.unwrap()
			.remove(&(collection, text.to_string()));
		match gate {
			Some(rx) => rx.await.unwrap_or_else(|_| Ok(CollectionHits::empty(collection))),
			None => Ok(CollectionHits::empty(collection)),
		}
	}
}

pub(crate) fn item(id: &str) -> ItemSummary {
	serde_json::from_value(json!({ "id": id, "name": format!("item {id}") })).unwrap()
}

pub(crate) fn seller(id: &str) -> SellerSummary {
	serde_json::from_value(json!({ "id": id, "name": format!("seller {id}") })).unwrap()
}
