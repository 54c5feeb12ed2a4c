pub mod collection;
pub mod dispatch;
pub mod probe;
pub mod sink;
pub mod validator;
pub mod variants;
