//! GraphQL schema and resolvers.
//!
//! Every operation maps onto exactly one document store call. `User.todos`
//! is resolved independently for each user, so listing N users with their
//! todos issues N+1 store queries.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! todoql serve --port 4000
//!
//! # Execute a query from CLI
//! todoql query '{ getUsers { userID name todos { id title completed } } }'
//!
//! # Execute a mutation from CLI
//! todoql mutate 'createUser(userID: "u1", name: "Ann", email: "a@x.com") { userID }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `getUserByID`, `getUsers`, `getTodoByID`, `getTodos`, `todosByUserID`
//! - **Mutations**: `createUser`, `createTodo`, `updateUser`, `updateTodo`,
//!   `deleteUser`, `deleteTodoByID`

mod schema;
mod types;

pub use schema::{AppState, GatewaySchema, MutationRoot, QueryRoot, build_schema, schema_sdl};
pub use types::*;
