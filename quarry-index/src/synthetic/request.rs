//! Dispatch sentinels, dispatch modes, and generation requests.

use quarry_core::errors::SynthError;

/// Reserved discriminator: the handler is invoked once per workspace
/// directory, each request scoped to a single directory.
pub const PER_DIRECTORY_DEFAULT: &str = "*";

/// Reserved discriminator: the handler is invoked exactly once for the
/// whole workspace.
pub const SINGLE_REQUEST_FOR_ALL: &str = "";

/// How requests are fanned out to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    PerDirectory,
    WholeWorkspace,
}

impl DispatchMode {
    /// Map a handler's declared path onto a dispatch mode.
    ///
    /// Only the two reserved sentinels are accepted; anything else is a
    /// registration error rather than a silent fallback.
    pub fn from_discriminator(handler: &str, discriminator: &str) -> Result<Self, SynthError> {
        match discriminator {
            PER_DIRECTORY_DEFAULT => Ok(Self::PerDirectory),
            SINGLE_REQUEST_FOR_ALL => Ok(Self::WholeWorkspace),
            other => Err(SynthError::UndefinedDispatchDiscriminator {
                handler: handler.to_string(),
                discriminator: other.to_string(),
            }),
        }
    }
}

/// The portion of the workspace one generation request covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RequestScope {
    /// One workspace directory (`""` is the workspace root directory).
    Directory(String),
    /// The entire workspace in a single request.
    AllDirectories,
}

impl RequestScope {
    /// The scope rendered as a path, matching the sentinel the handler
    /// registered under.
    pub fn path(&self) -> &str {
        match self {
            Self::Directory(directory) => directory,
            Self::AllDirectories => SINGLE_REQUEST_FOR_ALL,
        }
    }
}

/// A request for a handler to generate synthetic declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticRequest {
    pub scope: RequestScope,
}

impl SyntheticRequest {
    /// A request covering one directory.
    pub fn for_directory(directory: &str) -> Self {
        Self {
            scope: RequestScope::Directory(directory.to_string()),
        }
    }

    /// A request covering the whole workspace.
    pub fn for_workspace() -> Self {
        Self {
            scope: RequestScope::AllDirectories,
        }
    }

    pub fn path(&self) -> &str {
        self.scope.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_map_to_modes() {
        assert_eq!(
            DispatchMode::from_discriminator("h", PER_DIRECTORY_DEFAULT).unwrap(),
            DispatchMode::PerDirectory
        );
        assert_eq!(
            DispatchMode::from_discriminator("h", SINGLE_REQUEST_FOR_ALL).unwrap(),
            DispatchMode::WholeWorkspace
        );
    }

    #[test]
    fn test_ordinary_paths_are_rejected() {
        let result = DispatchMode::from_discriminator("lockfiles", "src/lockfiles");
        assert!(matches!(
            result,
            Err(SynthError::UndefinedDispatchDiscriminator { ref handler, ref discriminator })
                if handler == "lockfiles" && discriminator == "src/lockfiles"
        ));
    }

    #[test]
    fn test_request_paths() {
        assert_eq!(SyntheticRequest::for_directory("src/api").path(), "src/api");
        assert_eq!(SyntheticRequest::for_directory("").path(), "");
        assert_eq!(SyntheticRequest::for_workspace().path(), SINGLE_REQUEST_FOR_ALL);
    }
}
