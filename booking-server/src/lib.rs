//! Booking availability service
//!
//! Manages time-bounded reservations (bookings) and administrative holds
//! (blocks) against rentable properties, guaranteeing that no two active
//! reservations of the same property overlap and that status changes only
//! move through the permitted transitions.
//!
//! # Module structure
//!
//! ```text
//! booking-server/src/
//! ├── core/          # configuration, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── reservations/  # domain engine: roles, lifecycle, overlap, workflows
//! ├── db/            # SQLite pool, row models, repositories
//! └── utils/         # error type, logging, input validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod reservations;
pub mod utils;

// Re-export common types
pub use crate::core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____              __   _
   / __ )____  ____  / /__(_)___  ____ _
  / __  / __ \/ __ \/ //_/ / __ \/ __ `/
 / /_/ / /_/ / /_/ / ,< / / / / / /_/ /
/_____/\____/\____/_/|_/_/_/ /_/\__, /
                               /____/
    "#
    );
}
