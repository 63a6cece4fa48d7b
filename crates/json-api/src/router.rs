//! App Router

use salvo::Router;

use crate::{checkout, transactions};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("checkout").post(checkout::create::handler))
        .push(
            Router::with_path("transactions")
                .get(transactions::index::handler)
                .post(transactions::set_status::handler),
        )
}
