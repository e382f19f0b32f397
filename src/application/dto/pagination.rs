use crate::domain::cursor::PageCursor;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One keyset page. `next_cursor` is the opaque token of the last row and is
/// absent on the final page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl<T> CursorPage<T> {
    /// Converts repository rows and encodes the continuation position.
    pub fn from_rows<R>(rows: Vec<R>, next: Option<PageCursor>) -> Self
    where
        R: Into<T>,
    {
        let next_cursor = next.as_ref().map(PageCursor::encode);
        Self {
            items: rows.into_iter().map(Into::into).collect(),
            has_more: next_cursor.is_some(),
            next_cursor,
        }
    }
}
