pub mod create_user;
pub mod delete_user;
pub mod login_user;
