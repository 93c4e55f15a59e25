use axum::routing::any;

use crate::service::driver::Driver;

mod error;
mod nudge;

pub(crate) fn create<D: Driver>() -> axum::Router {
    axum::Router::new().route("/", any(nudge::handle::<D>))
}
