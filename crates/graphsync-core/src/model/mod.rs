pub mod node;
pub mod record;
pub mod side;
pub mod status;

pub use node::{Node, ID_ATTR, STATUS_ATTR};
pub use record::Record;
pub use side::Side;
pub use status::Status;
