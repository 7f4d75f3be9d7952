// Composition root for the work timer service.
//
// - Read config from the environment.
// - Instantiate the entry log, session store and clock.
// - Wire them into use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
