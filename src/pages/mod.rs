pub mod bug_detail;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
