use serde::Serialize;

/// Which keys are stored. Never carries the values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsStatus {
    pub openapi: bool,
    pub replicateapi: bool,
}
