mod cart;
mod menu;
mod order;
mod pagination;

pub use cart::*;
pub use menu::*;
pub use order::*;
pub use pagination::*;
