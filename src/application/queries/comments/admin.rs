use super::CommentQueryService;
use crate::{
    application::{
        dto::{CommentDto, CursorPage},
        error::ApplicationResult,
        guards::ensure_can_moderate,
        queries::paging::{decode_cursor, normalize_limit, normalize_search},
    },
    domain::{actor::Actor, comment::CommentFilter},
};

const DEFAULT_ADMIN_PAGE_SIZE: u32 = 50;

#[derive(Debug, Default)]
pub struct ListCommentsQuery {
    pub approved: Option<bool>,
    pub q: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl CommentQueryService {
    /// Moderator listing across all articles, newest first.
    pub async fn list_comments(
        &self,
        actor: &Actor,
        query: ListCommentsQuery,
    ) -> ApplicationResult<CursorPage<CommentDto>> {
        ensure_can_moderate(actor)?;

        let limit = normalize_limit(query.limit, DEFAULT_ADMIN_PAGE_SIZE);
        let cursor = decode_cursor(query.cursor.as_deref())?;
        let filter = CommentFilter {
            approved: query.approved,
            search: normalize_search(query.q),
        };

        let (records, next_cursor) = self.read_repo.search(&filter, limit, cursor).await?;
        Ok(CursorPage::from_rows(records, next_cursor))
    }
}
