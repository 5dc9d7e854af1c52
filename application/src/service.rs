mod author;
mod book;
mod cart_item;
#[cfg(test)]
mod memory;

pub use self::{author::*, book::*, cart_item::*};
