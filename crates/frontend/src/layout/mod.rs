pub mod global_context;
pub mod notice;
pub mod tabs;

pub use notice::{NoticeHost, NoticeService};
