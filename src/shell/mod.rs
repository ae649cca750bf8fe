// Composition root.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the log store and wire it into the use case handlers.
// - Expose the HTTP router and GraphQL schema the binary serves.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
