//! Typed repository for offers.

use std::collections::HashMap;

use chrono::Utc;
use tracing::info;

use realtor_models::{Offer, OfferStatus};

use crate::client::FirestoreClient;
use crate::error::FirestoreResult;
use crate::types::{Document, Filter, StructuredQuery, ToFirestoreValue, Value};

const COLLECTION: &str = "offers";

/// Repository for offer documents.
#[derive(Clone)]
pub struct OfferRepository {
    client: FirestoreClient,
}

impl OfferRepository {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, doc_id: &str) -> FirestoreResult<Option<Offer>> {
        let doc = self.client.get_document(COLLECTION, doc_id).await?;
        Ok(doc.as_ref().map(document_to_offer))
    }

    pub async fn list(&self) -> FirestoreResult<Vec<Offer>> {
        let docs = self.client.list_documents(COLLECTION).await?;
        Ok(docs.iter().map(document_to_offer).collect())
    }

    /// Offers on listings owned by the given agent; empty when none.
    pub async fn list_by_agent(&self, agent_email: &str) -> FirestoreResult<Vec<Offer>> {
        let query = StructuredQuery::collection(COLLECTION)
            .with_filter(Filter::equal("agent_email", agent_email.to_firestore_value()));
        let docs = self.client.run_query(query).await?;
        Ok(docs.iter().map(document_to_offer).collect())
    }

    /// Insert a new offer, returning the generated id.
    pub async fn create(&self, offer: &Offer) -> FirestoreResult<String> {
        let doc = self
            .client
            .create_document(COLLECTION, offer_to_fields(offer))
            .await?;
        let id = doc.doc_id().unwrap_or_default().to_string();
        info!(buyer = %offer.buyer_email, id = %id, "Created offer");
        Ok(id)
    }

    /// Set the workflow status, optionally recording the payment
    /// transaction reference alongside it. `NotFound` when the id does
    /// not resolve.
    pub async fn set_status(
        &self,
        doc_id: &str,
        status: OfferStatus,
        transaction_id: Option<&str>,
    ) -> FirestoreResult<()> {
        let mut fields = HashMap::new();
        fields.insert("status".to_string(), status.as_str().to_firestore_value());
        fields.insert("updated_at".to_string(), Utc::now().to_firestore_value());
        let mut mask = vec!["status", "updated_at"];
        if let Some(tx) = transaction_id {
            fields.insert("transaction_id".to_string(), tx.to_firestore_value());
            mask.push("transaction_id");
        }
        self.client
            .patch_document(COLLECTION, doc_id, fields, &mask)
            .await?;
        Ok(())
    }

    pub async fn delete(&self, doc_id: &str) -> FirestoreResult<()> {
        self.client.delete_document(COLLECTION, doc_id).await
    }
}

fn offer_to_fields(offer: &Offer) -> HashMap<String, Value> {
    let mut fields = HashMap::new();
    fields.insert(
        "property_id".to_string(),
        offer.property_id.to_firestore_value(),
    );
    if let Some(title) = &offer.property_title {
        fields.insert("property_title".to_string(), title.to_firestore_value());
    }
    if let Some(location) = &offer.property_location {
        fields.insert(
            "property_location".to_string(),
            location.to_firestore_value(),
        );
    }
    fields.insert(
        "buyer_email".to_string(),
        offer.buyer_email.to_firestore_value(),
    );
    if let Some(name) = &offer.buyer_name {
        fields.insert("buyer_name".to_string(), name.to_firestore_value());
    }
    fields.insert(
        "agent_email".to_string(),
        offer.agent_email.to_firestore_value(),
    );
    fields.insert(
        "offered_price".to_string(),
        offer.offered_price.to_firestore_value(),
    );
    fields.insert(
        "status".to_string(),
        offer.status.as_str().to_firestore_value(),
    );
    if let Some(tx) = &offer.transaction_id {
        fields.insert("transaction_id".to_string(), tx.to_firestore_value());
    }
    fields.insert(
        "created_at".to_string(),
        offer.created_at.to_firestore_value(),
    );
    fields.insert(
        "updated_at".to_string(),
        offer.updated_at.to_firestore_value(),
    );
    fields
}

fn document_to_offer(doc: &Document) -> Offer {
    Offer {
        id: doc.doc_id().unwrap_or_default().to_string(),
        property_id: doc.field::<String>("property_id").unwrap_or_default(),
        property_title: doc.field("property_title"),
        property_location: doc.field("property_location"),
        buyer_email: doc.field::<String>("buyer_email").unwrap_or_default(),
        buyer_name: doc.field("buyer_name"),
        agent_email: doc.field::<String>("agent_email").unwrap_or_default(),
        offered_price: doc.field("offered_price").unwrap_or_default(),
        status: doc
            .field::<String>("status")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default(),
        transaction_id: doc.field("transaction_id"),
        created_at: doc
            .field("created_at")
            .or_else(|| doc.created_time())
            .unwrap_or_else(Utc::now),
        updated_at: doc.field("updated_at").unwrap_or_else(Utc::now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_round_trip() {
        let offer = Offer::new("p1", "buyer@x.com", "agent@x.com", 180_000.0);
        let back = document_to_offer(&Document::new(offer_to_fields(&offer)));
        assert_eq!(back.property_id, "p1");
        assert_eq!(back.buyer_email, "buyer@x.com");
        assert_eq!(back.agent_email, "agent@x.com");
        assert_eq!(back.status, OfferStatus::Pending);
        assert_eq!(back.transaction_id, None);
    }
}
