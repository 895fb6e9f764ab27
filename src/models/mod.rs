pub mod person;
pub mod record;
pub mod slot;

pub use person::Person;
pub use record::{DietRequest, Record};
pub use slot::{Header, Slot};
