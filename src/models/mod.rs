//! Data models

mod article;
mod dining_commons_menu_item;
mod help_request;
mod menu_item_review;
mod organization;
mod recommendation_request;
mod user;

pub use article::*;
pub use dining_commons_menu_item::*;
pub use help_request::*;
pub use menu_item_review::*;
pub use organization::*;
pub use recommendation_request::*;
pub use user::*;
