mod add;
mod delete;
mod inspect;
mod list;
mod show;

pub use add::{add, add_bookmark};
pub use delete::{delete, delete_bookmark};
pub use inspect::{inspect, inspect_url};
pub use list::{list, list_bookmarks, render_table};
pub use show::{render_details, show, show_bookmark};
