pub mod page;
pub mod route;

pub use page::AppDetailsPage;
