//! HTTP route handlers for the marketplace API.
//!
//! # Route Structure
//!
//! ```text
//! GET   /                            - Greeting
//! GET   /health                      - Liveness check
//! GET   /health/ready                - Readiness check (in main.rs)
//!
//! # Session
//! POST  /session                     - Issue session cookie from identity claims
//! GET   /session/end                 - Clear session cookie
//!
//! # Users
//! PUT   /users                       - Upsert user by email (first login)
//! GET   /users/{email}               - Public profile lookup
//! GET   /users                       - List users (admin)
//! PATCH /users/{email}               - Update role/status (admin)
//!
//! # Catalog
//! GET    /medicines                  - Public list (?search=, ?sort=asc|desc)
//! GET    /medicines/mine             - Seller's own listings (seller)
//! GET    /medicines/{id}             - Public detail
//! POST   /medicines                  - Add listing (seller)
//! DELETE /medicines/{id}             - Delete own listing (seller)
//! GET    /admin/medicines            - Full catalog oversight (admin)
//! DELETE /admin/medicines/{id}       - Delete any listing (admin)
//!
//! # Categories (admin)
//! POST   /categories                 - Create category
//! GET    /categories                 - List categories
//! GET    /categories/{id}            - Category detail
//! PUT    /categories/{id}            - Partial update
//! DELETE /categories/{id}            - Delete category
//!
//! # Advertisements
//! POST  /advertisements              - Submit advertisement (seller)
//! GET   /advertisements              - Public list
//! PATCH /advertisements/{id}/slide   - Toggle slider membership (admin)
//!
//! # Cart
//! POST   /carts                      - Add item
//! GET    /carts?email=               - List items by owner
//! DELETE /carts/{id}                 - Remove item
//!
//! # Checkout & payments
//! POST  /checkout                    - Atomic payment insert + cart clear (auth)
//! POST  /create-payment-intent       - Stripe client secret for an amount
//! GET   /payments?email=             - Buyer payment history (auth)
//! GET   /payments/seller             - Payments addressed to the seller (seller)
//! GET   /payments/all                - All payments (admin)
//! PATCH /payments/{id}/mark-paid     - Transition pending -> paid (admin)
//!
//! # Dashboards
//! GET   /dashboard/admin             - {totalPayment, totalPrice, totalUsers} (admin)
//! GET   /dashboard/seller            - {totalPaid, totalPending} (seller)
//! ```

pub mod advertisements;
pub mod carts;
pub mod categories;
pub mod medicines;
pub mod payments;
pub mod session;
pub mod users;

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use crate::state::AppState;

/// Create the session routes router.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/session", post(session::start))
        .route("/session/end", get(session::end))
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", put(users::upsert).get(users::list))
        .route("/users/{email}", get(users::show).patch(users::update))
}

/// Create the catalog routes router.
pub fn medicine_routes() -> Router<AppState> {
    Router::new()
        .route("/medicines", get(medicines::index).post(medicines::create))
        .route("/medicines/mine", get(medicines::mine))
        .route(
            "/medicines/{id}",
            get(medicines::show).delete(medicines::remove),
        )
        .route("/admin/medicines", get(medicines::admin_index))
        .route("/admin/medicines/{id}", delete(medicines::admin_remove))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            post(categories::create).get(categories::index),
        )
        .route(
            "/categories/{id}",
            get(categories::show)
                .put(categories::update)
                .delete(categories::remove),
        )
}

/// Create the advertisement routes router.
pub fn advertisement_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/advertisements",
            post(advertisements::create).get(advertisements::index),
        )
        .route(
            "/advertisements/{id}/slide",
            patch(advertisements::toggle_slide),
        )
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/carts", post(carts::add).get(carts::index))
        .route("/carts/{id}", delete(carts::remove))
}

/// Create the checkout and payment routes router.
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/checkout", post(payments::checkout))
        .route("/create-payment-intent", post(payments::create_intent))
        .route("/payments", get(payments::history))
        .route("/payments/seller", get(payments::seller_history))
        .route("/payments/all", get(payments::list_all))
        .route("/payments/{id}/mark-paid", patch(payments::mark_paid))
        .route("/dashboard/admin", get(payments::admin_dashboard))
        .route("/dashboard/seller", get(payments::seller_dashboard))
}

/// Create all routes for the marketplace API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(session_routes())
        .merge(user_routes())
        .merge(medicine_routes())
        .merge(category_routes())
        .merge(advertisement_routes())
        .merge(cart_routes())
        .merge(payment_routes())
}
