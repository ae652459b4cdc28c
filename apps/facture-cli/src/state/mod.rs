//! # State Module
//!
//! Application state for the CLI: the order being edited and the
//! configuration read at startup.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐       │
//! │  │      OrderSession        │        │       ConfigState        │       │
//! │  │                          │        │                          │       │
//! │  │  order (client + lines)  │        │  brand_text              │       │
//! │  │  last_document           │        │  output_dir / filename   │       │
//! │  └──────────────────────────┘        └──────────────────────────┘       │
//! │                                                                         │
//! │  OrderSession: mutated by form commands                                 │
//! │  ConfigState: read-only after initialization                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod order;

pub use config::{ConfigState, ENV_BRAND, ENV_OUTPUT_DIR};
pub use order::OrderSession;
