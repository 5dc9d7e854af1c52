mod author;
mod book;
mod cart_item;

pub use self::{author::*, book::*, cart_item::*};
