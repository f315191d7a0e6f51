//! Game of Fifteen (workspace facade crate).
//!
//! This package keeps the `fifteen::{core,input,session,term,types}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use fifteen_core as core;
pub use fifteen_input as input;
pub use fifteen_session as session;
pub use fifteen_term as term;
pub use fifteen_types as types;
