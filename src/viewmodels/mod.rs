pub mod lesson_filter;
pub mod dashboard_viewmodel;
pub mod calendar_viewmodel;

pub use lesson_filter::{derive_bucket, derive_bucket_in, BucketCounts};
pub use dashboard_viewmodel::DashboardViewModel;
pub use calendar_viewmodel::CalendarViewModel;
