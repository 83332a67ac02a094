pub mod advisor;
pub mod providers;

pub use advisor::{Advisor, AdvisorError, EXPORT_ADVISOR_PERSONA};
