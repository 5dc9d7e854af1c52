mod author;
mod book;
mod caller;
mod cart_item;

pub use self::{author::*, book::*, caller::*, cart_item::*};
