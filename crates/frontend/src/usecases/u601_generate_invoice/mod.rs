//! u601: generate an invoice from an order's line items.
//!
//! Modal panel over a paginated line-item grid. Per-row invoice-date edits
//! accumulate in an [`state::EditBuffer`]; Save filters them down to the
//! dated rows and posts one create request, then navigates to the new
//! invoice. `state` and `submit` hold the pure logic, `api` the remote
//! calls, `view` the component.

pub mod api;
pub mod state;
pub mod submit;
pub mod view;

pub use view::InvoiceGenerator;
