use async_graphql::{ComplexObject, Context, ID, SimpleObject};

use super::schema::{AppState, resolver_error};
use crate::model;
use crate::store::Filter;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    #[graphql(name = "userID")]
    pub user_id: ID,
    pub name: String,
    pub email: String,
}

#[ComplexObject]
impl User {
    /// Todos whose `userID` matches this user. Resolved with one store query per user.
    async fn todos(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Todo>> {
        let state = ctx.data::<AppState>()?;
        let todos = state
            .todos
            .find_all(&Filter::eq("userID", self.user_id.as_str()))
            .await
            .map_err(resolver_error)?;
        Ok(todos.into_iter().map(Todo::from).collect())
    }
}

impl From<model::User> for User {
    fn from(u: model::User) -> Self {
        Self {
            user_id: ID(u.user_id),
            name: u.name,
            email: u.email,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Todo {
    #[graphql(name = "userID")]
    pub user_id: ID,
    pub id: ID,
    pub title: String,
    pub completed: bool,
}

impl From<model::Todo> for Todo {
    fn from(t: model::Todo) -> Self {
        Self {
            user_id: ID(t.user_id),
            id: ID(t.id),
            title: t.title,
            completed: t.completed,
        }
    }
}
