use crate::domain::actor::Actor;
use crate::domain::article::entity::Article;
use crate::domain::specification::Specification;

/// Update and delete rule: the article's author or a superuser, and never an
/// anonymous actor.
pub struct CanMutateArticleSpec<'a> {
    actor: &'a Actor,
    article: &'a Article,
}

impl<'a> CanMutateArticleSpec<'a> {
    pub fn new(actor: &'a Actor, article: &'a Article) -> Self {
        Self { actor, article }
    }
}

impl Specification for CanMutateArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.actor.is_authenticated()
            && (self.actor.is(self.article.author_id) || self.actor.is_superuser())
    }
}

pub fn can_mutate(actor: &Actor, article: &Article) -> bool {
    CanMutateArticleSpec::new(actor, article).is_satisfied()
}

/// Any authenticated actor may create articles.
pub fn can_create(actor: &Actor) -> bool {
    actor.is_authenticated()
}
