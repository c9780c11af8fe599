//! Synthetic target generation.
//!
//! Handlers contribute target declarations for paths that exist in no
//! declaration file. Each handler registers under one of two reserved
//! dispatch sentinels: `PER_DIRECTORY_DEFAULT` (one request per workspace
//! directory) or `SINGLE_REQUEST_FOR_ALL` (one request for the whole
//! workspace). Any other declared path is rejected at registration.
//!
//! Architecture:
//! - `request`: sentinels, dispatch modes, and the request type
//! - `handler`: the handler trait and its output type
//! - `registry`: handler registration and validation
//! - `dispatch`: parallel fan-out with per-scope failure isolation
//! - `cache`: memoization of successful generation results

pub mod cache;
pub mod dispatch;
pub mod handler;
pub mod registry;
pub mod request;

pub use cache::{HandlerResult, SyntheticCache};
pub use dispatch::{dispatch_synthetic, Contribution, DispatchFailure, DispatchOutcome};
pub use handler::{SyntheticAddressMap, SyntheticHandler};
pub use registry::{RegisteredHandler, SyntheticRegistry};
pub use request::{
    DispatchMode, RequestScope, SyntheticRequest, PER_DIRECTORY_DEFAULT, SINGLE_REQUEST_FOR_ALL,
};
