// PatientRecords-api lib.rs
//
// HTTP layer of the patient records service: routers, handlers, public
// response bodies, OpenAPI document and process configuration.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;
pub mod server;
pub mod telemetry;
