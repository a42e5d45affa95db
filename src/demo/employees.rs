//! In-memory employees collection.

use std::collections::BTreeMap;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::http::{read_json, response, write_json};
use crate::routing::{Resource, RouteParams, ID_PARAM};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
}

#[derive(Debug, Default)]
struct Directory {
    last_id: u64,
    employees: BTreeMap<String, Employee>,
}

/// Employees keyed by sequential string ids.
#[derive(Debug, Default)]
pub struct EmployeeResource {
    directory: RwLock<Directory>,
}

impl EmployeeResource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.directory.read().await.employees.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// The `id` attached to `req`, or the 400 reply when nothing was attached.
fn item_id(req: &Request<Body>) -> Result<String, Response> {
    let params = RouteParams::from_request(req)
        .ok_or_else(|| response::error(StatusCode::BAD_REQUEST))?;
    Ok(params.get(ID_PARAM).unwrap_or_default().to_string())
}

fn json_reply<T: Serialize + ?Sized>(data: &T) -> Response {
    write_json(data).unwrap_or_else(IntoResponse::into_response)
}

impl Resource for EmployeeResource {
    /// `GET /employees`
    async fn index(&self, _req: Request<Body>) -> Response {
        let directory = self.directory.read().await;
        json_reply(&directory.employees)
    }

    /// `POST /employees`
    async fn create(&self, req: Request<Body>) -> Response {
        let employee: Employee = match read_json(req).await {
            Ok(e) => e,
            Err(e) => return e.into_response(),
        };

        let mut directory = self.directory.write().await;
        let id = directory.last_id + 1;
        directory.employees.insert(id.to_string(), employee);
        directory.last_id = id;

        id.to_string().into_response()
    }

    /// `GET /employees/:id`
    async fn show(&self, req: Request<Body>) -> Response {
        let id = match item_id(&req) {
            Ok(id) => id,
            Err(res) => return res,
        };

        let directory = self.directory.read().await;
        match directory.employees.get(&id) {
            Some(employee) => json_reply(employee),
            None => response::not_found(),
        }
    }

    /// `PUT /employees/:id`
    async fn update(&self, req: Request<Body>) -> Response {
        let id = match item_id(&req) {
            Ok(id) => id,
            Err(res) => return res,
        };

        if !self.directory.read().await.employees.contains_key(&id) {
            return response::not_found();
        }

        // decode without holding the lock
        let employee: Employee = match read_json(req).await {
            Ok(e) => e,
            Err(e) => return e.into_response(),
        };

        let mut directory = self.directory.write().await;
        match directory.employees.get_mut(&id) {
            Some(existing) => {
                *existing = employee;
                StatusCode::OK.into_response()
            }
            // removed while the body was being read
            None => response::not_found(),
        }
    }

    /// `DELETE /employees/:id`
    async fn destroy(&self, req: Request<Body>) -> Response {
        let id = match item_id(&req) {
            Ok(id) => id,
            Err(res) => return res,
        };

        let mut directory = self.directory.write().await;
        match directory.employees.remove(&id) {
            Some(_) => StatusCode::OK.into_response(),
            None => response::not_found(),
        }
    }
}
