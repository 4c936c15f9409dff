//! Domain models backing the `market` schema.

pub mod advertisement;
pub mod cart;
pub mod category;
pub mod medicine;
pub mod payment;
pub mod user;

pub use advertisement::{Advertisement, NewAdvertisement, SlideToggle};
pub use cart::{CartItem, NewCartItem};
pub use category::{Category, NewCategory, UpdateCategory};
pub use medicine::{Medicine, NewMedicine};
pub use payment::{CheckoutOutcome, CheckoutPayment, Payment};
pub use user::User;
