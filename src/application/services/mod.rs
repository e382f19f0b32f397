// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            users::UserCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        comment::{CommentReadRepository, CommentWriteRepository},
        user::UserRepository,
    },
};

/// Tunables the services need from configuration.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    pub article_page_size: u32,
    pub recent_approved_limit: usize,
    pub comment_max_length: usize,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            article_page_size: 5,
            recent_approved_limit: crate::domain::moderation::DEFAULT_RECENT_APPROVED,
            comment_max_length: crate::domain::comment::DEFAULT_COMMENT_MAX_LEN,
        }
    }
}

pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub article_write: Arc<dyn ArticleWriteRepository>,
    pub article_read: Arc<dyn ArticleReadRepository>,
    pub comment_write: Arc<dyn CommentWriteRepository>,
    pub comment_read: Arc<dyn CommentReadRepository>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub user_queries: Arc<UserQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        settings: ServiceSettings,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&slugger),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_write),
            Arc::clone(&repos.article_read),
            Arc::clone(&slug_service),
            Arc::clone(&clock),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&repos.comment_write),
            Arc::clone(&repos.comment_read),
            Arc::clone(&repos.article_read),
            Arc::clone(&clock),
            settings.comment_max_length,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_read),
            Arc::clone(&repos.comment_read),
            Arc::clone(&clock),
            settings.article_page_size,
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&repos.comment_read),
            Arc::clone(&repos.article_read),
            Arc::clone(&clock),
            settings.recent_approved_limit,
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&clock),
        ));

        Self {
            user_commands,
            article_commands,
            comment_commands,
            article_queries,
            comment_queries,
            user_queries,
            token_manager,
        }
    }

    /// Resolve a raw bearer token into the authenticated identity.
    pub async fn authenticate(
        &self,
        token: &str,
    ) -> crate::application::ApplicationResult<crate::application::dto::AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
