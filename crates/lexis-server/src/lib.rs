//! Lexis HTTP API
//!
//! Stores strings, analyzes them on the way in, and serves them back through
//! structured filters or plain-English queries.
//!
//! | Method | Path | |
//! |---|---|---|
//! | `POST` | `/strings` | analyze and store `{"value": "..."}` |
//! | `GET` | `/strings` | list, with `is_palindrome`, `min_length`, `max_length`, `word_count`, `contains_character` |
//! | `GET` | `/strings/{value}` | fetch one |
//! | `DELETE` | `/strings/{value}` | delete one |
//! | `GET` | `/strings/filter-by-natural-language?query=...` | free-text filter |
//! | `GET` | `/health` | liveness |

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use routes::app;
pub use state::AppState;
