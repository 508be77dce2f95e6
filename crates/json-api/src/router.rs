//! App Router

use salvo::Router;

use crate::{auth, carts, categories, orders, products};

/// Routes that require a valid bearer token.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .post(categories::create::handler)
                .push(
                    Router::with_path("{category}")
                        .get(categories::get::handler)
                        .put(categories::update::handler)
                        .delete(categories::delete::handler)
                        .push(Router::with_path("products").get(categories::products::handler)),
                ),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("carts")
                .get(carts::find::handler)
                .post(carts::create::handler)
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .push(
                            Router::with_path("items")
                                .post(carts::items::create::handler)
                                .delete(carts::clear::handler)
                                .push(
                                    Router::with_path("{item}")
                                        .put(carts::items::update::handler)
                                        .delete(carts::items::delete::handler),
                                ),
                        ),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(
                    Router::with_path("{order}")
                        .get(orders::get::handler)
                        .delete(orders::delete::handler)
                        .push(Router::with_path("status").put(orders::update_status::handler)),
                ),
        )
}

/// Routes reachable without authentication.
pub(crate) fn public_router() -> Router {
    Router::new().push(
        Router::with_path("auth")
            .push(Router::with_path("register").post(auth::register::handler))
            .push(Router::with_path("login").post(auth::login::handler)),
    )
}
