use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Schema};

use crate::error::GatewayError;
use crate::model::{Todo as ModelTodo, TodoPatch, User as ModelUser, UserPatch};
use crate::store::{Collection, Filter, SharedStore};

use super::types::*;

pub type GatewaySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Store handles injected into every resolver.
pub struct AppState {
    pub users: Collection<ModelUser>,
    pub todos: Collection<ModelTodo>,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            users: Collection::new(store.clone()),
            todos: Collection::new(store),
        }
    }
}

pub fn build_schema(store: SharedStore) -> GatewaySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(AppState::new(store))
        .finish()
}

/// The schema in SDL form.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

/// Surface a store failure to the caller with its message unchanged.
pub(crate) fn resolver_error(err: GatewayError) -> async_graphql::Error {
    tracing::warn!(error = %err, kind = ?err.kind(), "resolver failed");
    err.extend()
}

fn state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a AppState> {
    ctx.data::<AppState>()
}

fn by_user_id(user_id: &str) -> Filter {
    Filter::eq("userID", user_id)
}

fn by_todo_id(id: &str) -> Filter {
    Filter::eq("id", id)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single user by userID
    #[graphql(name = "getUserByID")]
    async fn get_user_by_id(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userID")] user_id: ID,
    ) -> async_graphql::Result<Option<User>> {
        let user = state(ctx)?
            .users
            .find_one(&by_user_id(&user_id))
            .await
            .map_err(resolver_error)?;
        Ok(user.map(User::from))
    }

    /// List all users
    async fn get_users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let users = state(ctx)?
            .users
            .find_all(&Filter::all())
            .await
            .map_err(resolver_error)?;
        Ok(users.into_iter().map(User::from).collect())
    }

    /// Get a single todo by id
    #[graphql(name = "getTodoByID")]
    async fn get_todo_by_id(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Todo>> {
        let todo = state(ctx)?
            .todos
            .find_one(&by_todo_id(&id))
            .await
            .map_err(resolver_error)?;
        Ok(todo.map(Todo::from))
    }

    /// List all todos
    async fn get_todos(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Todo>> {
        let todos = state(ctx)?
            .todos
            .find_all(&Filter::all())
            .await
            .map_err(resolver_error)?;
        Ok(todos.into_iter().map(Todo::from).collect())
    }

    /// List the todos owned by a user
    #[graphql(name = "todosByUserID")]
    async fn todos_by_user_id(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userID")] user_id: String,
    ) -> async_graphql::Result<Vec<Todo>> {
        match state(ctx)?.todos.find_all(&by_user_id(&user_id)).await {
            Ok(todos) => Ok(todos.into_iter().map(Todo::from).collect()),
            Err(e) => {
                let kind = e.kind();
                tracing::warn!(error = %e, user_id = %user_id, "failed to fetch todos");
                Err(
                    async_graphql::Error::new(format!("Error fetching todos: {}", e))
                        .extend_with(|_, ext| ext.set("code", kind.code())),
                )
            }
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userID")] user_id: ID,
        name: String,
        email: String,
    ) -> async_graphql::Result<User> {
        let user = ModelUser::new(user_id.0, name, email);
        let created = state(ctx)?
            .users
            .insert(&user)
            .await
            .map_err(resolver_error)?;
        tracing::info!(user_id = %created.user_id, "created user");
        Ok(created.into())
    }

    /// Create a todo
    async fn create_todo(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userID")] user_id: ID,
        id: ID,
        title: String,
        #[graphql(default = false)] completed: bool,
    ) -> async_graphql::Result<Todo> {
        let todo = ModelTodo::new(user_id.0, id.0, title).with_completed(completed);
        let created = state(ctx)?
            .todos
            .insert(&todo)
            .await
            .map_err(resolver_error)?;
        tracing::info!(id = %created.id, user_id = %created.user_id, "created todo");
        Ok(created.into())
    }

    /// Update the supplied fields of a user
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userID")] user_id: ID,
        name: Option<String>,
        email: Option<String>,
    ) -> async_graphql::Result<Option<User>> {
        let patch = UserPatch::default().with_name(name).with_email(email);
        let updated = state(ctx)?
            .users
            .update_one(&by_user_id(&user_id), &patch)
            .await
            .map_err(resolver_error)?;
        Ok(updated.map(User::from))
    }

    /// Update the supplied fields of a todo
    async fn update_todo(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: Option<String>,
        completed: Option<bool>,
    ) -> async_graphql::Result<Option<Todo>> {
        let patch = TodoPatch::default()
            .with_title(title)
            .with_completed(completed);
        let updated = state(ctx)?
            .todos
            .update_one(&by_todo_id(&id), &patch)
            .await
            .map_err(resolver_error)?;
        Ok(updated.map(Todo::from))
    }

    /// Delete a user. Their todos are left in place.
    async fn delete_user(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "userID")] user_id: ID,
    ) -> async_graphql::Result<Option<User>> {
        let deleted = state(ctx)?
            .users
            .delete_one(&by_user_id(&user_id))
            .await
            .map_err(resolver_error)?;
        if deleted.is_some() {
            tracing::info!(user_id = %user_id.as_str(), "deleted user");
        }
        Ok(deleted.map(User::from))
    }

    /// Delete a todo by id
    #[graphql(name = "deleteTodoByID")]
    async fn delete_todo_by_id(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Todo>> {
        let deleted = state(ctx)?
            .todos
            .delete_one(&by_todo_id(&id))
            .await
            .map_err(resolver_error)?;
        if deleted.is_some() {
            tracing::info!(id = %id.as_str(), "deleted todo");
        }
        Ok(deleted.map(Todo::from))
    }
}
