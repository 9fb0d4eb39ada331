//! Page components: post list, navigation, comments and the landing page
//!
//! Each component turns configuration or content into serializable view
//! data; the templates module turns that data into HTML.

pub mod comments;
pub mod landing;
pub mod nav;
pub mod posts;

pub use comments::{CommentThreadRef, CommentsEmbed};
pub use landing::LandingPage;
pub use nav::{LinkTarget, NavItem, Navbar};
pub use posts::{render_post_list, ListOptions, PostSummary};
