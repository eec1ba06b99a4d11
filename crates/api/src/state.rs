use ferrous_dig_application::use_cases::QueryAuthoritativeUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub query_authoritative: Arc<QueryAuthoritativeUseCase>,
}
