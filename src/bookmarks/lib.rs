use libsql::Connection;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Category applied when a bookmark is created without one.
pub const DEFAULT_CATEGORY: &str = "general";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookmark {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookmark {
    pub title: String,
    pub url: String,
    pub category: String,
}

pub struct Bookmarks<'a> {
    conn: &'a Connection,
}

impl<'a> Bookmarks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub async fn create(&self, input: CreateBookmark) -> Result<Bookmark, StoreError> {
        let category = match input.category.as_deref() {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => DEFAULT_CATEGORY.to_string(),
        };

        let query = r#"
            INSERT INTO bookmarks (title, url, category)
            VALUES (?, ?, ?)
            RETURNING id, title, url, category, created_at, updated_at
        "#;

        let mut rows = self
            .conn
            .query(query, libsql::params![input.title, input.url, category])
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(self.row_to_bookmark(&row)?)
        } else {
            Err(StoreError::MissingRow)
        }
    }

    /// All bookmarks in storage order. No further ordering contract.
    pub async fn list(&self) -> Result<Vec<Bookmark>, StoreError> {
        let query = r#"
            SELECT id, title, url, category, created_at, updated_at
            FROM bookmarks
            ORDER BY id
        "#;

        let mut rows = self.conn.query(query, ()).await?;
        let mut bookmarks = Vec::new();

        while let Some(row) = rows.next().await? {
            bookmarks.push(self.row_to_bookmark(&row)?);
        }

        Ok(bookmarks)
    }

    /// Overwrites title, url, and category on the matching record. Returns
    /// `Ok(None)` when the id does not exist.
    pub async fn update(
        &self,
        id: i32,
        input: UpdateBookmark,
    ) -> Result<Option<Bookmark>, StoreError> {
        let query = r#"
            UPDATE bookmarks
            SET title = ?, url = ?, category = ?, updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
            WHERE id = ?
            RETURNING id, title, url, category, created_at, updated_at
        "#;

        let mut rows = self
            .conn
            .query(query, libsql::params![input.title, input.url, input.category, id])
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(self.row_to_bookmark(&row)?))
        } else {
            Ok(None)
        }
    }

    /// Returns `true` if a row was removed. Deleting a missing id is not an
    /// error.
    pub async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let result = self
            .conn
            .execute("DELETE FROM bookmarks WHERE id = ?", libsql::params![id])
            .await?;
        Ok(result > 0)
    }

    fn row_to_bookmark(&self, row: &libsql::Row) -> Result<Bookmark, StoreError> {
        Ok(Bookmark {
            id: row.get(0)?,
            title: row.get(1)?,
            url: row.get(2)?,
            category: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libsql::Builder;

    async fn setup() -> Connection {
        let db = Builder::new_local(":memory:").build().await.unwrap();
        let conn = db.connect().unwrap();
        for (_, sql) in crate::bookmarks::migrations() {
            conn.execute_batch(sql).await.unwrap();
        }
        conn
    }

    fn input(title: &str, url: &str, category: Option<&str>) -> CreateBookmark {
        CreateBookmark {
            title: title.to_string(),
            url: url.to_string(),
            category: category.map(|c| c.to_string()),
        }
    }

    #[tokio::test]
    async fn create_defaults_missing_category_to_general() {
        let conn = setup().await;
        let store = Bookmarks::new(&conn);

        let bookmark = store
            .create(input("A", "http://a.com", None))
            .await
            .unwrap();

        assert_eq!(bookmark.title, "A");
        assert_eq!(bookmark.url, "http://a.com");
        assert_eq!(bookmark.category, DEFAULT_CATEGORY);
        assert!(bookmark.id > 0);
        assert!(!bookmark.created_at.is_empty());
    }

    #[tokio::test]
    async fn create_defaults_empty_category_to_general() {
        let conn = setup().await;
        let store = Bookmarks::new(&conn);

        let bookmark = store
            .create(input("A", "http://a.com", Some("")))
            .await
            .unwrap();

        assert_eq!(bookmark.category, DEFAULT_CATEGORY);
    }

    #[tokio::test]
    async fn create_keeps_explicit_category() {
        let conn = setup().await;
        let store = Bookmarks::new(&conn);

        let bookmark = store
            .create(input("Docs", "https://doc.rust-lang.org", Some("reference")))
            .await
            .unwrap();

        assert_eq!(bookmark.category, "reference");
    }

    #[tokio::test]
    async fn list_returns_created_records_in_storage_order() {
        let conn = setup().await;
        let store = Bookmarks::new(&conn);

        let first = store.create(input("A", "http://a.com", None)).await.unwrap();
        let second = store.create(input("B", "http://b.com", None)).await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
        assert!(first.id < second.id);
    }

    #[tokio::test]
    async fn update_overwrites_all_three_fields() {
        let conn = setup().await;
        let store = Bookmarks::new(&conn);

        let created = store
            .create(input("A", "http://a.com", Some("work")))
            .await
            .unwrap();

        let updated = store
            .update(
                created.id,
                UpdateBookmark {
                    title: "A2".to_string(),
                    url: "http://a2.com".to_string(),
                    category: "personal".to_string(),
                },
            )
            .await
            .unwrap()
            .expect("record should exist");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "A2");
        assert_eq!(updated.url, "http://a2.com");
        assert_eq!(updated.category, "personal");
        assert_eq!(updated.created_at, created.created_at);

        // The stored record reflects the overwrite.
        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "A2");
    }

    #[tokio::test]
    async fn update_missing_id_returns_none() {
        let conn = setup().await;
        let store = Bookmarks::new(&conn);

        let result = store
            .update(
                9999,
                UpdateBookmark {
                    title: "ghost".to_string(),
                    url: "http://ghost.com".to_string(),
                    category: "none".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_removes_record_and_is_idempotent() {
        let conn = setup().await;
        let store = Bookmarks::new(&conn);

        let created = store.create(input("A", "http://a.com", None)).await.unwrap();

        assert!(store.delete(created.id).await.unwrap());
        assert!(store.list().await.unwrap().is_empty());

        // Second delete reports not-found rather than failing.
        assert!(!store.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn delete_missing_id_returns_false() {
        let conn = setup().await;
        let store = Bookmarks::new(&conn);

        assert!(!store.delete(123).await.unwrap());
    }
}
