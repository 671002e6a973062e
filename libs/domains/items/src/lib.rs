//! Items Domain
//!
//! Item catalogue backed by a single JSON document, plus aggregate statistics
//! computed over it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (items + stats)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, id assignment, write gate, reports
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Whole-collection load/save (trait + JSON file)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, JsonFileRepository, ItemService};
//!
//! let service = ItemService::new(JsonFileRepository::new("data/items.json"));
//!
//! let items = handlers::router(service.clone());
//! let stats = handlers::stats_router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod json_file;
pub mod models;
pub mod report;
pub mod repository;
pub mod service;
pub mod stats;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::{ApiDoc, StatsApiDoc};
pub use json_file::JsonFileRepository;
pub use models::{Item, ItemPayload, ItemQuery, Price};
pub use report::{StatsReport, SummaryReport};
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
