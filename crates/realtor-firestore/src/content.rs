//! Typed repositories for blog posts and testimonials.

use std::collections::HashMap;

use chrono::Utc;

use realtor_models::{BlogPost, Testimonial};

use crate::client::FirestoreClient;
use crate::error::FirestoreResult;
use crate::types::{Document, ToFirestoreValue, Value};

const BLOGS: &str = "blogs";
const TESTIMONIALS: &str = "testimonials";

/// Repository for blog post documents.
#[derive(Clone)]
pub struct BlogRepository {
    client: FirestoreClient,
}

impl BlogRepository {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> FirestoreResult<Vec<BlogPost>> {
        let docs = self.client.list_documents(BLOGS).await?;
        Ok(docs.iter().map(document_to_blog).collect())
    }

    pub async fn create(&self, post: &BlogPost) -> FirestoreResult<String> {
        let doc = self.client.create_document(BLOGS, blog_to_fields(post)).await?;
        Ok(doc.doc_id().unwrap_or_default().to_string())
    }
}

/// Repository for testimonial documents.
#[derive(Clone)]
pub struct TestimonialRepository {
    client: FirestoreClient,
}

impl TestimonialRepository {
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, doc_id: &str) -> FirestoreResult<Option<Testimonial>> {
        let doc = self.client.get_document(TESTIMONIALS, doc_id).await?;
        Ok(doc.as_ref().map(document_to_testimonial))
    }

    pub async fn list(&self) -> FirestoreResult<Vec<Testimonial>> {
        let docs = self.client.list_documents(TESTIMONIALS).await?;
        Ok(docs.iter().map(document_to_testimonial).collect())
    }

    pub async fn create(&self, testimonial: &Testimonial) -> FirestoreResult<String> {
        let doc = self
            .client
            .create_document(TESTIMONIALS, testimonial_to_fields(testimonial))
            .await?;
        Ok(doc.doc_id().unwrap_or_default().to_string())
    }
}

fn blog_to_fields(post: &BlogPost) -> HashMap<String, Value> {
    let mut fields = HashMap::new();
    fields.insert("title".to_string(), post.title.to_firestore_value());
    fields.insert("content".to_string(), post.content.to_firestore_value());
    if let Some(author) = &post.author {
        fields.insert("author".to_string(), author.to_firestore_value());
    }
    if let Some(image) = &post.image {
        fields.insert("image".to_string(), image.to_firestore_value());
    }
    fields.insert("created_at".to_string(), post.created_at.to_firestore_value());
    fields
}

fn document_to_blog(doc: &Document) -> BlogPost {
    BlogPost {
        id: doc.doc_id().unwrap_or_default().to_string(),
        title: doc.field::<String>("title").unwrap_or_default(),
        content: doc.field::<String>("content").unwrap_or_default(),
        author: doc.field("author"),
        image: doc.field("image"),
        created_at: doc
            .field("created_at")
            .or_else(|| doc.created_time())
            .unwrap_or_else(Utc::now),
    }
}

fn testimonial_to_fields(testimonial: &Testimonial) -> HashMap<String, Value> {
    let mut fields = HashMap::new();
    fields.insert("name".to_string(), testimonial.name.to_firestore_value());
    fields.insert("quote".to_string(), testimonial.quote.to_firestore_value());
    if let Some(image) = &testimonial.image {
        fields.insert("image".to_string(), image.to_firestore_value());
    }
    if let Some(rating) = testimonial.rating {
        fields.insert("rating".to_string(), rating.to_firestore_value());
    }
    fields.insert(
        "created_at".to_string(),
        testimonial.created_at.to_firestore_value(),
    );
    fields
}

fn document_to_testimonial(doc: &Document) -> Testimonial {
    Testimonial {
        id: doc.doc_id().unwrap_or_default().to_string(),
        name: doc.field::<String>("name").unwrap_or_default(),
        quote: doc.field::<String>("quote").unwrap_or_default(),
        image: doc.field("image"),
        rating: doc.field("rating"),
        created_at: doc
            .field("created_at")
            .or_else(|| doc.created_time())
            .unwrap_or_else(Utc::now),
    }
}
