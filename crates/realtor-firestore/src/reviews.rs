//! Typed repository for listing reviews.

use std::collections::HashMap;

use chrono::Utc;

use realtor_models::Review;

use crate::client::FirestoreClient;
use crate::error::FirestoreResult;
use crate::types::{Document, ToFirestoreValue, Value};

const COLLECTION: &str = "reviews";

/// Repository for review documents.
#[derive(Clone)]
pub struct ReviewRepository {
    client: FirestoreClient,
}

impl ReviewRepository {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, doc_id: &str) -> FirestoreResult<Option<Review>> {
        let doc = self.client.get_document(COLLECTION, doc_id).await?;
        Ok(doc.as_ref().map(document_to_review))
    }

    pub async fn list(&self) -> FirestoreResult<Vec<Review>> {
        let docs = self.client.list_documents(COLLECTION).await?;
        Ok(docs.iter().map(document_to_review).collect())
    }

    /// Insert a new review, returning the generated id.
    pub async fn create(&self, review: &Review) -> FirestoreResult<String> {
        let doc = self
            .client
            .create_document(COLLECTION, review_to_fields(review))
            .await?;
        Ok(doc.doc_id().unwrap_or_default().to_string())
    }

    pub async fn delete(&self, doc_id: &str) -> FirestoreResult<()> {
        self.client.delete_document(COLLECTION, doc_id).await
    }
}

fn review_to_fields(review: &Review) -> HashMap<String, Value> {
    let mut fields = HashMap::new();
    fields.insert(
        "property_id".to_string(),
        review.property_id.to_firestore_value(),
    );
    if let Some(title) = &review.property_title {
        fields.insert("property_title".to_string(), title.to_firestore_value());
    }
    fields.insert(
        "reviewer_email".to_string(),
        review.reviewer_email.to_firestore_value(),
    );
    if let Some(name) = &review.reviewer_name {
        fields.insert("reviewer_name".to_string(), name.to_firestore_value());
    }
    fields.insert("rating".to_string(), review.rating.to_firestore_value());
    fields.insert("comment".to_string(), review.comment.to_firestore_value());
    fields.insert(
        "created_at".to_string(),
        review.created_at.to_firestore_value(),
    );
    fields
}

fn document_to_review(doc: &Document) -> Review {
    Review {
        id: doc.doc_id().unwrap_or_default().to_string(),
        property_id: doc.field::<String>("property_id").unwrap_or_default(),
        property_title: doc.field("property_title"),
        reviewer_email: doc.field::<String>("reviewer_email").unwrap_or_default(),
        reviewer_name: doc.field("reviewer_name"),
        rating: doc.field("rating").unwrap_or_default(),
        comment: doc.field::<String>("comment").unwrap_or_default(),
        created_at: doc
            .field("created_at")
            .or_else(|| doc.created_time())
            .unwrap_or_else(Utc::now),
    }
}
