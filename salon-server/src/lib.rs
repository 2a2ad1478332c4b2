//! Bristle Salon Server
//!
//! Backend for a pet grooming salon: clients and their pets,
//! appointment scheduling, staff and payroll, inventory, expenses,
//! groomer performance reporting and a Stripe Connect status proxy.
//!
//! # Module structure
//!
//! ```text
//! salon-server/src/
//! ├── core/          # config, state, server, errors
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # redb key-value storage and per-collection stores
//! ├── reporting/     # groomer performance aggregation
//! ├── payroll/       # pay periods and payroll summaries
//! ├── scheduling/    # business-hours slot computation
//! ├── stripe/        # Stripe REST client
//! └── utils/         # logging, money, time helpers
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod payroll;
pub mod reporting;
pub mod scheduling;
pub mod stripe;
pub mod utils;

pub use core::{build_app, build_router, Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env, create the work directory and start logging.
///
/// Production logs go to a daily-rotated file under the work dir.
pub fn setup_environment() -> core::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    if config.is_production() {
        let log_dir = config.log_dir();
        init_logger_with_file(None, log_dir.to_str());
    } else {
        init_logger();
    }

    Ok(())
}
