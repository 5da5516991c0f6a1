//! Typed repository for property listings.

use std::collections::HashMap;

use chrono::Utc;
use tracing::info;

use realtor_models::{Property, PropertyStatus, PropertyUpdate};

use crate::client::FirestoreClient;
use crate::error::FirestoreResult;
use crate::types::{Document, Filter, StructuredQuery, ToFirestoreValue, Value};

const COLLECTION: &str = "properties";

/// Repository for listing documents.
#[derive(Clone)]
pub struct PropertyRepository {
    client: FirestoreClient,
}

impl PropertyRepository {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, doc_id: &str) -> FirestoreResult<Option<Property>> {
        let doc = self.client.get_document(COLLECTION, doc_id).await?;
        Ok(doc.as_ref().map(document_to_property))
    }

    pub async fn list(&self) -> FirestoreResult<Vec<Property>> {
        let docs = self.client.list_documents(COLLECTION).await?;
        Ok(docs.iter().map(document_to_property).collect())
    }

    /// Listings owned by the given agent; empty when none.
    pub async fn list_by_agent(&self, agent_email: &str) -> FirestoreResult<Vec<Property>> {
        let query = StructuredQuery::collection(COLLECTION)
            .with_filter(Filter::equal("agent_email", agent_email.to_firestore_value()));
        let docs = self.client.run_query(query).await?;
        Ok(docs.iter().map(document_to_property).collect())
    }

    /// Insert a new listing, returning the generated id.
    pub async fn create(&self, property: &Property) -> FirestoreResult<String> {
        let doc = self
            .client
            .create_document(COLLECTION, property_to_fields(property))
            .await?;
        let id = doc.doc_id().unwrap_or_default().to_string();
        info!(agent = %property.agent_email, id = %id, "Created listing");
        Ok(id)
    }

    /// Merge the fields present in `update` into the stored record.
    /// Absent fields stay untouched. `NotFound` when the id does not
    /// resolve. Returns the updated record.
    pub async fn update(&self, doc_id: &str, update: &PropertyUpdate) -> FirestoreResult<Property> {
        let mut fields = HashMap::new();
        if let Some(title) = &update.title {
            fields.insert("title".to_string(), title.to_firestore_value());
        }
        if let Some(location) = &update.location {
            fields.insert("location".to_string(), location.to_firestore_value());
        }
        if let Some(image) = &update.image {
            fields.insert("image".to_string(), image.to_firestore_value());
        }
        if let Some(bed_number) = update.bed_number {
            fields.insert("bed_number".to_string(), bed_number.to_firestore_value());
        }
        if let Some(bath_number) = update.bath_number {
            fields.insert("bath_number".to_string(), bath_number.to_firestore_value());
        }
        if let Some(price) = update.price {
            fields.insert("price".to_string(), price.to_firestore_value());
        }
        if let Some(price_range) = &update.price_range {
            fields.insert("price_range".to_string(), price_range.to_firestore_value());
        }
        if let Some(agent_name) = &update.agent_name {
            fields.insert("agent_name".to_string(), agent_name.to_firestore_value());
        }
        fields.insert("updated_at".to_string(), Utc::now().to_firestore_value());

        let mut mask = update.field_paths();
        mask.push("updated_at");

        let doc = self
            .client
            .patch_document(COLLECTION, doc_id, fields, &mask)
            .await?;
        Ok(document_to_property(&doc))
    }

    /// Set the verification status only. Idempotent when already in the
    /// target state; `NotFound` when the id does not resolve.
    pub async fn set_status(&self, doc_id: &str, status: PropertyStatus) -> FirestoreResult<()> {
        let mut fields = HashMap::new();
        fields.insert("status".to_string(), status.as_str().to_firestore_value());
        fields.insert("updated_at".to_string(), Utc::now().to_firestore_value());
        self.client
            .patch_document(COLLECTION, doc_id, fields, &["status", "updated_at"])
            .await?;
        Ok(())
    }

    pub async fn delete(&self, doc_id: &str) -> FirestoreResult<()> {
        self.client.delete_document(COLLECTION, doc_id).await
    }
}

fn property_to_fields(property: &Property) -> HashMap<String, Value> {
    let mut fields = HashMap::new();
    fields.insert("title".to_string(), property.title.to_firestore_value());
    fields.insert("location".to_string(), property.location.to_firestore_value());
    if let Some(image) = &property.image {
        fields.insert("image".to_string(), image.to_firestore_value());
    }
    if let Some(bed_number) = property.bed_number {
        fields.insert("bed_number".to_string(), bed_number.to_firestore_value());
    }
    if let Some(bath_number) = property.bath_number {
        fields.insert("bath_number".to_string(), bath_number.to_firestore_value());
    }
    if let Some(price) = property.price {
        fields.insert("price".to_string(), price.to_firestore_value());
    }
    if let Some(price_range) = &property.price_range {
        fields.insert("price_range".to_string(), price_range.to_firestore_value());
    }
    if let Some(agent_name) = &property.agent_name {
        fields.insert("agent_name".to_string(), agent_name.to_firestore_value());
    }
    fields.insert(
        "agent_email".to_string(),
        property.agent_email.to_firestore_value(),
    );
    fields.insert(
        "status".to_string(),
        property.status.as_str().to_firestore_value(),
    );
    fields.insert(
        "created_at".to_string(),
        property.created_at.to_firestore_value(),
    );
    fields.insert(
        "updated_at".to_string(),
        property.updated_at.to_firestore_value(),
    );
    fields
}

fn document_to_property(doc: &Document) -> Property {
    Property {
        id: doc.doc_id().unwrap_or_default().to_string(),
        title: doc.field::<String>("title").unwrap_or_default(),
        location: doc.field::<String>("location").unwrap_or_default(),
        image: doc.field("image"),
        bed_number: doc.field("bed_number"),
        bath_number: doc.field("bath_number"),
        price: doc.field("price"),
        price_range: doc.field("price_range"),
        agent_name: doc.field("agent_name"),
        agent_email: doc.field::<String>("agent_email").unwrap_or_default(),
        status: doc
            .field::<String>("status")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default(),
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
        let mut property = Property::new("Villa", "Lake Rd 5", "agent@x.com");
        property.bed_number = Some(4);
        property.price = Some(320_000.0);

        let back = document_to_property(&Document::new(property_to_fields(&property)));
        assert_eq!(back.title, "Villa");
        assert_eq!(back.bed_number, Some(4));
        assert_eq!(back.price, Some(320_000.0));
        assert_eq!(back.status, PropertyStatus::Pending);
        assert_eq!(back.price_range, None);
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let mut fields = HashMap::new();
        fields.insert("title".to_string(), "Villa".to_firestore_value());
        let back = document_to_property(&Document::new(fields));
        assert_eq!(back.status, PropertyStatus::Pending);
    }
}
