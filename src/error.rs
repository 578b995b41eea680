use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading and validating a scenario.
///
/// The integrator itself never returns these: non-finite values produced
/// during integration are left in the trajectory.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid scenario parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Scenario file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Scenario file is not valid YAML for a `ScenarioConfig`.
    #[error("scenario parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidParam("dt must be finite and > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("dt"));
    }
}
