use axum::{
    Router,
    routing::{get, post, put},
};

use crate::modules::auth::controller::{
    get_me, login_user, logout_user, register_user, update_password, update_profile,
};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .route("/me", get(get_me))
        .route("/update-profile", put(update_profile))
        .route("/update-password", put(update_password))
        .route("/logout", post(logout_user))
}
