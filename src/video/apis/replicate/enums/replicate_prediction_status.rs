#[derive(Debug, PartialEq, Eq)]
pub enum ReplicatePredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
}

impl ReplicatePredictionStatus {
    pub fn value(&self) -> String {
        match *self {
            ReplicatePredictionStatus::Starting => "starting".to_string(),
            ReplicatePredictionStatus::Processing => "processing".to_string(),
            ReplicatePredictionStatus::Succeeded => "succeeded".to_string(),
            ReplicatePredictionStatus::Failed => "failed".to_string(),
            ReplicatePredictionStatus::Canceled => "canceled".to_string(),
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "starting" => Some(Self::Starting),
            "processing" => Some(Self::Processing),
            "succeeded" => Some(Self::Succeeded),
            "failed" => Some(Self::Failed),
            "canceled" => Some(Self::Canceled),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Canceled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_finished_statuses_are_terminal() {
        let terminal = |value: &str| {
            ReplicatePredictionStatus::from_value(value)
                .map(|status| status.is_terminal())
                .unwrap_or(false)
        };

        assert!(!terminal("starting"));
        assert!(!terminal("processing"));
        assert!(terminal("succeeded"));
        assert!(terminal("failed"));
        assert!(terminal("canceled"));
        assert!(!terminal("queued"));
    }

    #[test]
    fn value_round_trips() {
        assert_eq!(
            ReplicatePredictionStatus::from_value(&ReplicatePredictionStatus::Canceled.value()),
            Some(ReplicatePredictionStatus::Canceled)
        );
    }
}
