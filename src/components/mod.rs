//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod avatar;
pub mod blog_card;
pub mod comments;
pub mod follow_list;
pub mod guard;
pub mod loading;
pub mod modal;
pub mod navbar;
pub mod pager;
pub mod toast;

pub use avatar::Avatar;
pub use blog_card::BlogCard;
pub use comments::CommentsSection;
pub use follow_list::{FollowListDialog, FollowSide};
pub use guard::{GuestOnly, RequireAuth};
pub use loading::Loading;
pub use modal::Modal;
pub use navbar::Navbar;
pub use pager::Pager;
pub use toast::Toast;
