pub mod aggregate;

pub use aggregate::{Invoice, InvoiceId, InvoiceLine};
