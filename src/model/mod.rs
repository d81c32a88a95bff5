//! Pure data structures: the raw [`Order`] record as the order API sends it, the
//! decoded [`Stage`] legs, and the derived [`OrderSummary`].

pub mod order;
pub mod stage;
pub mod summary;
pub mod value;

pub use order::*;
pub use stage::*;
pub use summary::*;
pub use value::*;
