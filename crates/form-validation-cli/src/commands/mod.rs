pub mod countries;
pub mod email;
pub mod password;
pub mod postal;
pub mod submit;
