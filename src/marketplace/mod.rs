pub mod listing;
pub mod order;
pub mod user;

pub use listing::{Listing, ListingPatch, ListingStatus, NewListing};
pub use order::{NewOrder, Order, OrderPatch, OrderStatus};
pub use user::{NewUser, User, UserPatch};
