pub mod landing;
pub mod not_found;
pub mod survey;

pub use landing::LandingPage;
pub use not_found::NotFound;
pub use survey::SurveyPage;
