use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::detail_tab_label;
use crate::shared::api_utils::api_url;
use crate::shared::components::number_format::format_currency;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::page_frame::PageFrame;
use contracts::domain::a002_invoice::{Invoice, InvoiceLine};
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Owned copies of the billed lines for the grid. Row views outlive the
/// reactive borrow of the fetched document, so they cannot hold `&`s
/// into it.
fn billed_lines(doc: &Invoice) -> Vec<InvoiceLine> {
    doc.lines.clone()
}

/// Invoice detail page: header card plus the billed lines.
///
/// This is the navigation target after the invoice generator succeeds.
#[component]
pub fn InvoiceDetails(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let stored_id = StoredValue::new(id.clone());

    let (doc, set_doc) = signal(None::<Invoice>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let load_doc = move || {
        let id_val = stored_id.get_value();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let url = api_url(&format!("/api/a002/invoice/{}", id_val));
            match Request::get(&url).send().await {
                Ok(response) if response.ok() => match response.json::<Invoice>().await {
                    Ok(data) => {
                        let tab_key = format!("a002_invoice_detail_{}", id_val);
                        let tab_title = detail_tab_label("Invoice", &data.invoice_no);
                        tabs_store.update_tab_title(&tab_key, &tab_title);

                        set_doc.set(Some(data));
                    }
                    Err(e) => set_error.set(Some(format!("Parse error: {}", e))),
                },
                Ok(r) => set_error.set(Some(format!("HTTP {}", r.status()))),
                Err(e) => set_error.set(Some(format!("Network error: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move || {
        load_doc();
    });

    view! {
        <PageFrame page_id="a002_invoice--detail" category="detail">
            {move || {
                let doc_title = doc.get()
                    .map(|d| format!("Invoice {}", d.invoice_no))
                    .unwrap_or_else(|| "Invoice".to_string());
                view! {
                    <div class="page__header">
                        <div class="page__header-left">
                            <h1 class="page__title">{doc_title}</h1>
                        </div>
                        <div class="page__header-right">
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| on_close.run(())
                            >
                                "Close"
                            </Button>
                        </div>
                    </div>
                }
            }}

            <div class="page__content">
                {move || {
                    if loading.get() {
                        return view! {
                            <Flex gap=FlexGap::Small style="align-items:center;padding:40px;justify-content:center;">
                                <Spinner />
                                <span>"Loading..."</span>
                            </Flex>
                        }.into_any();
                    }
                    if let Some(err) = error.get() {
                        return view! {
                            <div class="alert alert--error" style="margin: 16px;">
                                <strong>"Error: "</strong>{err}
                            </div>
                        }.into_any();
                    }
                    if let Some(d) = doc.get() {
                        let lines = billed_lines(&d);
                        view! {
                            <div style="padding:16px;display:flex;flex-direction:column;gap:16px;">
                                <Card>
                                    <div style="padding:12px;display:grid;grid-template-columns:max-content 1fr;gap:8px 24px;align-items:baseline;">
                                        <span class="form__label">"Number:"</span>
                                        <strong>{d.invoice_no.clone()}</strong>

                                        <span class="form__label">"Created:"</span>
                                        <span>{format_datetime(&d.created_at.to_rfc3339())}</span>

                                        <span class="form__label">"Order:"</span>
                                        <code style="font-family:monospace;">{d.order_id.as_string()}</code>

                                        <span class="form__label">"Total:"</span>
                                        <strong>{format_currency(d.total_amount)}</strong>
                                    </div>
                                </Card>

                                <Card>
                                    <Table attr:style="width: 100%;">
                                        <TableHeader>
                                            <TableRow>
                                                <TableHeaderCell>"Product"</TableHeaderCell>
                                                <TableHeaderCell>"Invoice Date"</TableHeaderCell>
                                                <TableHeaderCell>"Unit Price"</TableHeaderCell>
                                                <TableHeaderCell>"Quantity"</TableHeaderCell>
                                                <TableHeaderCell>"Total Price"</TableHeaderCell>
                                            </TableRow>
                                        </TableHeader>
                                        <TableBody>
                                            {lines.into_iter().map(|line| {
                                                let invoice_date = format_date(&line.invoice_date);
                                                let unit_price = format_currency(line.unit_price);
                                                let total_price = format_currency(line.total_price);
                                                view! {
                                                    <TableRow>
                                                        <TableCell>
                                                            <TableCellLayout truncate=true>
                                                                {line.product_name}
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>
                                                                {invoice_date}
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>
                                                                <span style="font-variant-numeric: tabular-nums;">
                                                                    {unit_price}
                                                                </span>
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>
                                                                <span style="font-variant-numeric: tabular-nums;">
                                                                    {line.quantity}
                                                                </span>
                                                            </TableCellLayout>
                                                        </TableCell>
                                                        <TableCell>
                                                            <TableCellLayout>
                                                                <span style="font-variant-numeric: tabular-nums;">
                                                                    {total_price}
                                                                </span>
                                                            </TableCellLayout>
                                                        </TableCell>
                                                    </TableRow>
                                                }
                                            }).collect_view()}
                                        </TableBody>
                                    </Table>
                                </Card>
                            </div>
                        }.into_any()
                    } else {
                        view! { <div>"No data"</div> }.into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::OrderId;
    use contracts::domain::a002_invoice::InvoiceId;
    use uuid::Uuid;

    fn invoice_with_lines() -> Invoice {
        let line = |name: &str| InvoiceLine {
            product_name: name.to_string(),
            invoice_date: "2024-05-01".to_string(),
            unit_price: 10.0,
            quantity: 1.0,
            total_price: 10.0,
        };
        Invoice {
            id: InvoiceId::new(Uuid::new_v4()),
            invoice_no: "INV-00000031".to_string(),
            order_id: OrderId::new(Uuid::new_v4()),
            created_at: chrono::Utc::now(),
            total_amount: 20.0,
            lines: vec![line("Widget"), line("Gadget")],
        }
    }

    #[test]
    fn grid_rows_do_not_borrow_the_document() {
        let doc = invoice_with_lines();
        let rows = billed_lines(&doc);
        drop(doc);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].product_name, "Widget");
        assert_eq!(rows[1].product_name, "Gadget");
    }
}
