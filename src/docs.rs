use chatter_models::{CredentialsRequest, User};
use utoipa::OpenApi;

use crate::modules::health::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::health::health,
    ),
    components(schemas(User, CredentialsRequest, HealthResponse)),
    tags(
        (name = "Authentication", description = "Account registration and login"),
        (name = "Health", description = "Service liveness"),
    ),
    info(
        title = "Chatter API",
        description = "Account registration and login for the Chatter chat backend.\n\nError responses are plain text.",
    )
)]
pub struct ApiDoc;
