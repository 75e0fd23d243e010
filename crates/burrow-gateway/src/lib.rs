//! HTTP gateway for the Burrow URL shortener.
//!
//! Exposes a [`Shortener`][burrow_shortener::Shortener] over HTTP:
//!
//! | Route | Description |
//! |---|---|
//! | `POST /shorten` | shorten `{"url": "..."}` |
//! | `GET /{code}` | redirect to the original URL and count the access |
//! | `GET /info/{code}` | details about a short code |
//! | `GET /stats` | registry counters |
//! | `GET /health` | liveness probe |

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
