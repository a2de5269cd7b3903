use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(banner_routes())
        .merge(project_routes())
        .routes(routes!(handlers::uploads::serve_upload))
}

fn banner_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::banner::upload_banner))
        .routes(routes!(handlers::banner::list_banners))
        .routes(routes!(handlers::banner::delete_banner))
}

fn project_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::project::upload_project))
        .routes(routes!(handlers::project::list_projects))
        .routes(routes!(handlers::project::delete_project))
}
