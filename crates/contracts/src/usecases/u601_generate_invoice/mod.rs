pub mod request;

pub use request::{
    CreateInvoiceRequest, CreateInvoiceResponse, LineItemCountResponse, LineItemDraft,
    LineItemQuery,
};
