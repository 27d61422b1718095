//! spacebio-qa: Client for the remote question-answering service.
//!
//! The service does the retrieval and generation; this crate only validates
//! the request, sends it, and turns whatever comes back (or fails to) into a
//! [`spacebio_common::QueryResult`].

pub mod answer;
pub mod client;
pub mod dispatch;
pub mod error;
pub mod limit;

pub use answer::Answer;
pub use client::{AnswerService, HttpAnswerService};
pub use dispatch::QueryDispatcher;
pub use error::QueryError;
pub use limit::ResultLimit;
