use crate::{ApiKey, Endpoint, Generation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub endpoint: Endpoint,
    pub page: u32,
    pub api_key: ApiKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchMovies {
        generation: Generation,
        request: FetchRequest,
    },
}
