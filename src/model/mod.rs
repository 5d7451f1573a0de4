//! Data models for the gateway.
//!
//! - [`User`]: an account, identified by its caller-supplied `userID`
//! - [`Todo`]: a task owned by a user through the `userID` soft foreign key
//! - [`UserPatch`], [`TodoPatch`]: partial updates carrying only supplied fields
//!
//! The serde field names are the stored document keys. Records live in the
//! `User` and `Todo` collections; documents stored under other collection
//! names (such as pluralized `users`/`todos`) are not read.

mod todo;
mod user;

pub use todo::{Todo, TodoPatch};
pub use user::{User, UserPatch};
