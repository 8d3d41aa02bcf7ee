use utoipa::OpenApi;

use crate::modules::stocks::model::{QuoteResponse, ScreenerResponse};
use crate::modules::system::controller::{HealthResponse, RootResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::system::controller::health,
        crate::modules::system::controller::root,
        crate::modules::stocks::controller::get_quote,
        crate::modules::stocks::controller::run_screener,
    ),
    components(schemas(HealthResponse, RootResponse, QuoteResponse, ScreenerResponse)),
    tags(
        (name = "System", description = "Liveness and health checks"),
        (name = "Stocks", description = "Eastmoney quote lookup and market screener")
    ),
    info(
        title = "stockProject API",
        description = "Backend for the stockProject frontend: live A-share quotes and a two-stage market screener."
    )
)]
pub struct ApiDoc;
