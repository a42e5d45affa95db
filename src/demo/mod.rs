//! The bundled application served by `resource-server`.
//!
//! ```text
//! GET    /health            → "ok"
//! GET    /employees         → all employees (JSON)
//! POST   /employees         → new id (text)
//! GET    /employees/:id     → one employee (JSON)
//! PUT    /employees/:id     → replace
//! DELETE /employees/:id     → remove
//! ```

pub mod employees;

use axum::{body::Body, http::Request};

use crate::config::DemoConfig;
use crate::routing::{RouteError, Router};

pub use employees::{Employee, EmployeeResource};

/// Assemble the application router.
pub fn app_router(config: &DemoConfig) -> Result<Router, RouteError> {
    let mut router = Router::new();
    router.handle_fn("/health", |_req: Request<Body>| async { "ok" })?;

    if config.enabled {
        router.handle_resource(&config.employees_path, EmployeeResource::new())?;
    }
    Ok(router)
}
