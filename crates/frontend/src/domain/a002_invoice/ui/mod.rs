pub mod details;
pub mod list;

pub use details::InvoiceDetails;
pub use list::InvoiceList;
