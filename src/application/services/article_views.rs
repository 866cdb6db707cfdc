use std::collections::HashMap;

use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::Article,
        category::{Category, CategoryId, CategoryRepository},
    },
};

/// Load every category referenced by `articles` in a single lookup.
pub async fn category_map(
    repo: &dyn CategoryRepository,
    articles: &[&Article],
) -> ApplicationResult<HashMap<CategoryId, Category>> {
    let mut ids: Vec<CategoryId> = articles
        .iter()
        .flat_map(|article| article.category_ids.iter().copied())
        .collect();
    ids.sort();
    ids.dedup();

    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let categories = repo.find_by_ids(&ids).await?;
    Ok(categories.into_iter().map(|c| (c.id, c)).collect())
}

pub async fn article_dto(
    repo: &dyn CategoryRepository,
    article: Article,
) -> ApplicationResult<ArticleDto> {
    let categories = category_map(repo, &[&article]).await?;
    Ok(ArticleDto::from_parts(article, &categories))
}

pub async fn article_dtos(
    repo: &dyn CategoryRepository,
    articles: Vec<Article>,
) -> ApplicationResult<Vec<ArticleDto>> {
    let refs: Vec<&Article> = articles.iter().collect();
    let categories = category_map(repo, &refs).await?;
    Ok(articles
        .into_iter()
        .map(|article| ArticleDto::from_parts(article, &categories))
        .collect())
}
