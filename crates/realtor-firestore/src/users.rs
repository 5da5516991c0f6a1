//! Typed repository for user records.

use std::collections::HashMap;

use chrono::Utc;
use tracing::info;

use realtor_models::{Role, UserRecord};

use crate::client::FirestoreClient;
use crate::error::FirestoreResult;
use crate::types::{Document, Filter, StructuredQuery, ToFirestoreValue, Value};

const COLLECTION: &str = "users";

/// Repository for user documents. Uniqueness is by email: callers look
/// the email up before inserting.
#[derive(Clone)]
pub struct UserRepository {
    client: FirestoreClient,
}

impl UserRepository {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    /// Look a user up by email. `None` when no record exists.
    pub async fn find_by_email(&self, email: &str) -> FirestoreResult<Option<UserRecord>> {
        let query = StructuredQuery::collection(COLLECTION)
            .with_filter(Filter::equal("email", email.to_firestore_value()))
            .with_limit(1);
        let docs = self.client.run_query(query).await?;
        Ok(docs.first().map(document_to_user))
    }

    /// Role for the given email; `None` when the user record is absent.
    pub async fn role_of(&self, email: &str) -> FirestoreResult<Option<Role>> {
        Ok(self.find_by_email(email).await?.map(|u| u.role))
    }

    pub async fn list(&self) -> FirestoreResult<Vec<UserRecord>> {
        let docs = self.client.list_documents(COLLECTION).await?;
        Ok(docs.iter().map(document_to_user).collect())
    }

    /// Insert a new record, returning the generated id.
    pub async fn create(&self, user: &UserRecord) -> FirestoreResult<String> {
        let doc = self
            .client
            .create_document(COLLECTION, user_to_fields(user))
            .await?;
        let id = doc.doc_id().unwrap_or_default().to_string();
        info!(user = %user.email, id = %id, "Created user record");
        Ok(id)
    }

    /// Change the role of an existing record. `NotFound` when the id
    /// does not resolve.
    pub async fn set_role(&self, doc_id: &str, role: Role) -> FirestoreResult<()> {
        let mut fields = HashMap::new();
        fields.insert("role".to_string(), role.as_str().to_firestore_value());
        self.client
            .patch_document(COLLECTION, doc_id, fields, &["role"])
            .await?;
        Ok(())
    }

    pub async fn delete(&self, doc_id: &str) -> FirestoreResult<()> {
        self.client.delete_document(COLLECTION, doc_id).await
    }
}

fn user_to_fields(user: &UserRecord) -> HashMap<String, Value> {
    let mut fields = HashMap::new();
    fields.insert("email".to_string(), user.email.to_firestore_value());
    if let Some(name) = &user.name {
        fields.insert("name".to_string(), name.to_firestore_value());
    }
    if let Some(photo) = &user.photo {
        fields.insert("photo".to_string(), photo.to_firestore_value());
    }
    fields.insert("role".to_string(), user.role.as_str().to_firestore_value());
    fields.insert("created_at".to_string(), user.created_at.to_firestore_value());
    fields
}

fn document_to_user(doc: &Document) -> UserRecord {
    UserRecord {
        id: doc.doc_id().unwrap_or_default().to_string(),
        email: doc.field::<String>("email").unwrap_or_default(),
        name: doc.field("name"),
        photo: doc.field("photo"),
        role: doc
            .field::<String>("role")
            .and_then(|r| r.parse().ok())
            .unwrap_or_default(),
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
        let user = UserRecord::new("a@x.com", Some("Ana".to_string()), None);
        let fields = user_to_fields(&user);
        let doc = Document::new(fields);

        let back = document_to_user(&doc);
        assert_eq!(back.email, "a@x.com");
        assert_eq!(back.name.as_deref(), Some("Ana"));
        assert_eq!(back.role, Role::User);
    }

    #[test]
    fn test_unknown_role_falls_back_to_plain_user() {
        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "a@x.com".to_firestore_value());
        fields.insert("role".to_string(), "owner".to_firestore_value());
        let back = document_to_user(&Document::new(fields));
        assert_eq!(back.role, Role::User);
    }
}
