//! Typed repository for wishlist entries.

use std::collections::HashMap;

use chrono::Utc;

use realtor_models::WishlistItem;

use crate::client::FirestoreClient;
use crate::error::FirestoreResult;
use crate::types::{Document, Filter, StructuredQuery, ToFirestoreValue, Value};

const COLLECTION: &str = "wishlist";

/// Repository for wishlist documents, keyed by (user email, property id).
#[derive(Clone)]
pub struct WishlistRepository {
    client: FirestoreClient,
}

impl WishlistRepository {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    /// Entries owned by the given user; empty when none.
    pub async fn list_for_user(&self, user_email: &str) -> FirestoreResult<Vec<WishlistItem>> {
        let query = StructuredQuery::collection(COLLECTION)
            .with_filter(Filter::equal("user_email", user_email.to_firestore_value()));
        let docs = self.client.run_query(query).await?;
        Ok(docs.iter().map(document_to_item).collect())
    }

    /// The user's entry for a listing, if any.
    pub async fn find(
        &self,
        user_email: &str,
        property_id: &str,
    ) -> FirestoreResult<Option<WishlistItem>> {
        let query = StructuredQuery::collection(COLLECTION)
            .with_filter(Filter::and(vec![
                Filter::equal("user_email", user_email.to_firestore_value()),
                Filter::equal("property_id", property_id.to_firestore_value()),
            ]))
            .with_limit(1);
        let docs = self.client.run_query(query).await?;
        Ok(docs.first().map(document_to_item))
    }

    /// Insert a new entry, returning the generated id.
    pub async fn create(&self, item: &WishlistItem) -> FirestoreResult<String> {
        let doc = self
            .client
            .create_document(COLLECTION, item_to_fields(item))
            .await?;
        Ok(doc.doc_id().unwrap_or_default().to_string())
    }

    pub async fn delete(&self, doc_id: &str) -> FirestoreResult<()> {
        self.client.delete_document(COLLECTION, doc_id).await
    }
}

fn item_to_fields(item: &WishlistItem) -> HashMap<String, Value> {
    let mut fields = HashMap::new();
    fields.insert(
        "user_email".to_string(),
        item.user_email.to_firestore_value(),
    );
    fields.insert(
        "property_id".to_string(),
        item.property_id.to_firestore_value(),
    );
    if let Some(title) = &item.property_title {
        fields.insert("property_title".to_string(), title.to_firestore_value());
    }
    if let Some(location) = &item.property_location {
        fields.insert(
            "property_location".to_string(),
            location.to_firestore_value(),
        );
    }
    if let Some(image) = &item.image {
        fields.insert("image".to_string(), image.to_firestore_value());
    }
    if let Some(price_range) = &item.price_range {
        fields.insert("price_range".to_string(), price_range.to_firestore_value());
    }
    fields.insert(
        "created_at".to_string(),
        item.created_at.to_firestore_value(),
    );
    fields
}

fn document_to_item(doc: &Document) -> WishlistItem {
    WishlistItem {
        id: doc.doc_id().unwrap_or_default().to_string(),
        user_email: doc.field::<String>("user_email").unwrap_or_default(),
        property_id: doc.field::<String>("property_id").unwrap_or_default(),
        property_title: doc.field("property_title"),
        property_location: doc.field("property_location"),
        image: doc.field("image"),
        price_range: doc.field("price_range"),
        created_at: doc
            .field("created_at")
            .or_else(|| doc.created_time())
            .unwrap_or_else(Utc::now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_round_trip() {
        let item = WishlistItem::new("user@x.com", "p1");
        let back = document_to_item(&Document::new(item_to_fields(&item)));
        assert_eq!(back.user_email, "user@x.com");
        assert_eq!(back.property_id, "p1");
    }
}
