//! Page components, one per route.

pub mod about;
pub mod add_candidate;
pub mod admin;
pub mod candidates;
pub mod change_password;
pub mod home;
pub mod login;
pub mod profile;
pub mod results;
pub mod signup;
pub mod update_candidate;
pub mod vote;

pub use about::AboutPage;
pub use add_candidate::AddCandidatePage;
pub use admin::AdminDashboardPage;
pub use candidates::CandidateListPage;
pub use change_password::ChangePasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use results::VoteResultsPage;
pub use signup::SignupPage;
pub use update_candidate::UpdateCandidatePage;
pub use vote::CastVotePage;
