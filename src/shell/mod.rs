// Composition root for both services.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers and routers.
// - Spawn the background sync worker of the search service.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod telemetry;
pub mod workers;
