use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, CursorPage},
        error::{ApplicationError, ApplicationResult},
        queries::paging::{decode_cursor, normalize_limit, normalize_search},
    },
    domain::{
        actor::Actor,
        article::{ArticleFilter, ArticleStatus},
        user::UserId,
        visibility::article_scope,
    },
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
    pub q: Option<String>,
    /// Superuser only.
    pub status: Option<ArticleStatus>,
    /// Superuser only.
    pub author_id: Option<i64>,
}

impl ArticleQueryService {
    /// One page of the articles the actor may see, newest publication first.
    pub async fn list_articles(
        &self,
        actor: &Actor,
        query: ListArticlesQuery,
    ) -> ApplicationResult<CursorPage<ArticleDto>> {
        if (query.status.is_some() || query.author_id.is_some()) && !actor.is_superuser() {
            return Err(ApplicationError::forbidden(
                "status and author filters require a superuser",
            ));
        }

        let limit = normalize_limit(query.limit, self.page_size);
        let cursor = decode_cursor(query.cursor.as_deref())?;

        let mut filter = ArticleFilter::new(article_scope(actor, self.clock.now()));
        filter.status = query.status;
        filter.author_id = query.author_id.map(UserId::new).transpose()?;
        filter.search = normalize_search(query.q);

        let (records, next_cursor) = self.read_repo.list_page(&filter, limit, cursor).await?;
        Ok(CursorPage::from_rows(records, next_cursor))
    }
}
