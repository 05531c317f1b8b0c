use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpecZeroscope {
    pub prompt: String,
}
