pub mod address;
pub mod contact;
pub mod small_contact;

pub use address::AddressConverter;
pub use contact::ContactConverter;
pub use small_contact::SmallContactConverter;
