//! GraphQL schema over the [`Resolver`].
//!
//! ```graphql
//! type Query {
//!   articles(max: Int): [Article!]!
//!   article(title: String!): [Article!]!
//!   search(keyword: String!): [Article!]!
//! }
//! ```
//!
//! A failed operation resolves to `null` data with the operation's fixed
//! message in `errors[].message`.

use std::sync::Arc;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema};

use crate::models::Article;
use crate::resolver::Resolver;

pub type GatewaySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema with `resolver` attached as context data
pub fn build_schema(resolver: Arc<Resolver>) -> GatewaySchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(resolver)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Top general-category headlines
    async fn articles(&self, ctx: &Context<'_>, max: Option<i32>) -> Result<Vec<Article>> {
        let articles = resolver(ctx)?.articles(max.map(i64::from)).await?;
        Ok(articles.to_vec())
    }

    /// Articles whose title matches `title`
    async fn article(&self, ctx: &Context<'_>, title: String) -> Result<Vec<Article>> {
        let articles = resolver(ctx)?.article(&title).await?;
        Ok(articles.to_vec())
    }

    /// Articles matching `keyword` anywhere
    async fn search(&self, ctx: &Context<'_>, keyword: String) -> Result<Vec<Article>> {
        let articles = resolver(ctx)?.search(&keyword).await?;
        Ok(articles.to_vec())
    }
}

fn resolver<'a>(ctx: &Context<'a>) -> Result<&'a Arc<Resolver>> {
    ctx.data::<Arc<Resolver>>()
}
