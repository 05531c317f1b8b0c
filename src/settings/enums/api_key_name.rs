/// Names the API keys are stored under.
#[non_exhaustive]
pub struct ApiKeyName;

impl ApiKeyName {
    pub const OPENAI: &'static str = "openapi";
    pub const REPLICATE: &'static str = "replicateapi";

    pub const ALL: [&'static str; 2] = [Self::OPENAI, Self::REPLICATE];
}
