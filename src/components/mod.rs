pub mod bug_table;
pub mod navbar;
pub mod protected_route;
