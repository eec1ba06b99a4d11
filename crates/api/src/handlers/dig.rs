use crate::{dto::DigParams, state::AppState};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use ferrous_dig_domain::{DomainName, ServerAnswerBundle};
use tracing::{debug, instrument, warn};

/// `GET /api/dig?name=<domain>`: one bundle per authoritative server.
///
/// Always answers 200; a missing, repeated or invalid name gives `[]`.
#[instrument(skip_all, name = "api_dig")]
pub async fn dig(
    State(state): State<AppState>,
    params: Result<Query<DigParams>, QueryRejection>,
) -> Json<Vec<ServerAnswerBundle>> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Dig request with unparseable query");
            return Json(Vec::new());
        }
    };

    let Some(raw_name) = params.trimmed_name() else {
        warn!("Dig request without a name");
        return Json(Vec::new());
    };

    let name = match DomainName::parse(raw_name) {
        Ok(name) => name,
        Err(e) => {
            warn!(name = %raw_name, error = %e, "Dig request with invalid name");
            return Json(Vec::new());
        }
    };

    let bundles = state.query_authoritative.execute(&name).await;
    debug!(domain = %name, servers = bundles.len(), "Dig request served");

    Json(bundles)
}
