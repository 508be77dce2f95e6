//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use souk_app::{
    auth::{
        MockAuthService,
        models::{User, UserUuid},
    },
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{Cart, CartItem, CartItemUuid, CartUuid},
        },
        categories::{
            MockCategoriesService,
            models::{Category, CategoryUuid},
        },
        orders::{
            MockOrdersService,
            models::{
                Order, OrderItem, OrderItemUuid, OrderStatus, OrderUuid, PaymentMethod,
                ShippingAddress,
            },
        },
        products::{
            MockProductsService,
            models::{Product, ProductUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_UUID: UserUuid = UserUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_user(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_user_uuid(TEST_USER_UUID);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_category(uuid: CategoryUuid, name: &str) -> Category {
    Category {
        uuid,
        name: name.to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(uuid: ProductUuid) -> Product {
    Product {
        uuid,
        name: "Test Product".to_string(),
        description: "A product used in tests".to_string(),
        price: 100,
        quantity: 10,
        expires_on: None,
        category_uuid: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart(uuid: CartUuid, customer_email: &str) -> Cart {
    Cart {
        uuid,
        customer_email: customer_email.to_string(),
        total: 0,
        items: Vec::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_cart_item(cart: CartUuid, product: ProductUuid, quantity: u32) -> CartItem {
    CartItem {
        uuid: CartItemUuid::new(),
        cart_uuid: cart,
        product_uuid: product,
        quantity,
        unit_price: 100,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(uuid: OrderUuid, customer_email: &str) -> Order {
    Order {
        uuid,
        customer_name: "Ada Lovelace".to_string(),
        customer_email: customer_email.to_string(),
        contact_number: "+1 555 0100".to_string(),
        shipping: ShippingAddress {
            address: "1 Example Way".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62701".to_string(),
            country: "US".to_string(),
        },
        status: OrderStatus::Pending,
        payment_method: PaymentMethod::CreditCard,
        total: 0,
        items: Vec::new(),
        ordered_at: Timestamp::UNIX_EPOCH,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order_item(order: OrderUuid, product: ProductUuid, quantity: u32) -> OrderItem {
    OrderItem {
        uuid: OrderItemUuid::new(),
        order_uuid: order,
        product_uuid: product,
        quantity,
        unit_price: 100,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_user(uuid: UserUuid, email: &str) -> User {
    User {
        uuid,
        email: email.to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_categories_mock() -> MockCategoriesService {
    let mut categories = MockCategoriesService::new();

    categories.expect_list_categories().never();
    categories.expect_get_category().never();
    categories.expect_create_category().never();
    categories.expect_rename_category().never();
    categories.expect_delete_category().never();

    categories
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();
    products.expect_search_products().never();
    products.expect_list_products_by_category().never();

    products
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_create_cart().never();
    carts.expect_get_cart().never();
    carts.expect_get_cart_by_email().never();
    carts.expect_add_item().never();
    carts.expect_update_item_quantity().never();
    carts.expect_remove_item().never();
    carts.expect_clear_cart().never();

    carts
}

fn strict_orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_create_order().never();
    orders.expect_get_order().never();
    orders.expect_list_orders().never();
    orders.expect_list_orders_by_email().never();
    orders.expect_list_orders_by_status().never();
    orders.expect_update_status().never();
    orders.expect_delete_order().never();

    orders
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_register().never();
    auth.expect_login().never();
    auth.expect_authenticate().never();

    auth
}

struct AppMocks {
    categories: MockCategoriesService,
    products: MockProductsService,
    carts: MockCartsService,
    orders: MockOrdersService,
    auth: MockAuthService,
}

impl Default for AppMocks {
    fn default() -> Self {
        Self {
            categories: strict_categories_mock(),
            products: strict_products_mock(),
            carts: strict_carts_mock(),
            orders: strict_orders_mock(),
            auth: strict_auth_mock(),
        }
    }
}

impl AppMocks {
    fn into_state(self) -> Arc<State> {
        Arc::new(State::new(AppContext {
            categories: Arc::new(self.categories),
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
            auth: Arc::new(self.auth),
        }))
    }
}

fn authed_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(inject_user)
            .push(route),
    )
}

pub(crate) fn categories_service(categories: MockCategoriesService, route: Router) -> Service {
    let state = AppMocks {
        categories,
        ..AppMocks::default()
    }
    .into_state();

    authed_service(state, route)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    let state = AppMocks {
        products,
        ..AppMocks::default()
    }
    .into_state();

    authed_service(state, route)
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    let state = AppMocks {
        carts,
        ..AppMocks::default()
    }
    .into_state();

    authed_service(state, route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    let state = AppMocks {
        orders,
        ..AppMocks::default()
    }
    .into_state();

    authed_service(state, route)
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    AppMocks {
        auth,
        ..AppMocks::default()
    }
    .into_state()
}

/// Auth endpoints are public, so no user is injected.
pub(crate) fn auth_service(auth: MockAuthService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_auth(auth)))
            .push(route),
    )
}
