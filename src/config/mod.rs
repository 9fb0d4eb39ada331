//! Configuration module

mod site;

pub use site::CommentsConfig;
pub use site::HighlightConfig;
pub use site::NavItemConfig;
pub use site::ProfileConfig;
pub use site::ScheduleLinkConfig;
pub use site::ShowcaseEntry;
pub use site::SiteConfig;
