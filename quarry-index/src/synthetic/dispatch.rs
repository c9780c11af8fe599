//! Fan-out of generation requests to registered handlers.
//!
//! Requests run in parallel via rayon. A failing or panicking invocation
//! poisons only its own scope: one bad directory never blocks the other
//! directories, and one bad handler never blocks the other handlers.

use std::sync::Arc;

use rayon::prelude::*;

use quarry_core::errors::SynthError;

use super::cache::{HandlerResult, SyntheticCache};
use super::handler::{SyntheticAddressMap, SyntheticHandler};
use super::registry::SyntheticRegistry;
use super::request::{DispatchMode, RequestScope, SyntheticRequest};

/// One synthetic address map together with the handler that produced it.
#[derive(Debug, Clone)]
pub struct Contribution {
    pub handler: String,
    pub map: SyntheticAddressMap,
}

/// One failed invocation, scoped to the request that failed.
#[derive(Debug)]
pub struct DispatchFailure {
    pub handler: String,
    pub scope: RequestScope,
    pub error: SynthError,
}

/// Everything a dispatch round produced.
#[derive(Debug, Default)]
pub struct DispatchOutcome {
    /// Successful contributions in (path, handler) order.
    pub contributions: Vec<Contribution>,
    /// Per-scope failures in (handler, scope) order.
    pub failures: Vec<DispatchFailure>,
}

/// Invoke every registered handler over the given workspace directories.
///
/// Per-directory handlers receive one request per directory; whole-workspace
/// handlers receive a single request. Successful results are read from and
/// written to `cache` when one is supplied.
pub fn dispatch_synthetic(
    registry: &SyntheticRegistry,
    directories: &[String],
    cache: Option<&SyntheticCache>,
) -> DispatchOutcome {
    let mut work: Vec<(usize, RequestScope)> = Vec::new();
    for (index, registered) in registry.handlers().iter().enumerate() {
        match registered.mode {
            DispatchMode::PerDirectory => {
                for directory in directories {
                    work.push((index, RequestScope::Directory(directory.clone())));
                }
            }
            DispatchMode::WholeWorkspace => {
                work.push((index, RequestScope::AllDirectories));
            }
        }
    }

    let results: Vec<(usize, RequestScope, Result<HandlerResult, SynthError>)> = work
        .into_par_iter()
        .map(|(index, scope)| {
            let registered = &registry.handlers()[index];
            let result = invoke(registered.handler.as_ref(), &scope, cache);
            (index, scope, result)
        })
        .collect();

    let mut outcome = DispatchOutcome::default();
    for (index, scope, result) in results {
        let name = registry.handlers()[index].handler.name();
        match result {
            Ok(maps) => {
                for map in maps.iter() {
                    outcome.contributions.push(Contribution {
                        handler: name.to_string(),
                        map: map.clone(),
                    });
                }
            }
            Err(error) => outcome.failures.push(DispatchFailure {
                handler: name.to_string(),
                scope,
                error,
            }),
        }
    }

    // Sort for deterministic output
    outcome
        .contributions
        .sort_by(|a, b| (&a.map.path, &a.handler).cmp(&(&b.map.path, &b.handler)));
    outcome
        .failures
        .sort_by(|a, b| (&a.handler, a.scope.path()).cmp(&(&b.handler, b.scope.path())));
    outcome
}

/// Run one request against one handler, consulting the cache and containing
/// panics to this scope.
fn invoke(
    handler: &dyn SyntheticHandler,
    scope: &RequestScope,
    cache: Option<&SyntheticCache>,
) -> Result<HandlerResult, SynthError> {
    if let Some(cache) = cache {
        let cached = match scope {
            RequestScope::Directory(directory) => cache.get_directory(handler.name(), directory),
            RequestScope::AllDirectories => cache.get_workspace(handler.name()),
        };
        if let Some(result) = cached {
            return Ok(result);
        }
    }

    let request = SyntheticRequest {
        scope: scope.clone(),
    };
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        handler.generate(&request)
    }));
    let maps: Vec<SyntheticAddressMap> = match outcome {
        Ok(generated) => generated?,
        Err(_) => {
            tracing::error!(
                handler = handler.name(),
                scope = scope.path(),
                "synthetic handler panicked during generation"
            );
            return Err(SynthError::HandlerPanicked);
        }
    };

    let result = Arc::new(maps);
    if let Some(cache) = cache {
        match scope {
            RequestScope::Directory(directory) => {
                cache.insert_directory(handler.name(), directory, Arc::clone(&result));
            }
            RequestScope::AllDirectories => {
                cache.insert_workspace(handler.name(), Arc::clone(&result));
            }
        }
    }
    Ok(result)
}
