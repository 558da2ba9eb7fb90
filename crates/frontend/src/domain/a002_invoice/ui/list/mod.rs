use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::detail_tab_label;
use crate::shared::api_utils::api_base;
use crate::shared::components::number_format::format_currency;
use crate::shared::date_utils::format_datetime;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a002_invoice::Invoice;
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn InvoiceList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (items, set_items) = signal(Vec::<Invoice>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let open_detail = move |id: String, invoice_no: String| {
        tabs_store.open_tab(
            &format!("a002_invoice_detail_{}", id),
            &detail_tab_label("Invoice", &invoice_no),
        );
    };

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let url = format!(
                "{}/api/a002/invoice/list?_ts={}",
                api_base(),
                js_sys::Date::now() as i64
            );
            let result = Request::get(&url)
                .header("Cache-Control", "no-cache, no-store, must-revalidate")
                .header("Pragma", "no-cache")
                .send()
                .await;
            match result {
                Ok(response) if response.ok() => match response.json::<Vec<Invoice>>().await {
                    Ok(list) => set_items.set(list),
                    Err(e) => set_error.set(Some(format!("Parse error: {}", e))),
                },
                Ok(response) => {
                    set_error.set(Some(format!("Server error: {}", response.status())))
                }
                Err(e) => set_error.set(Some(format!("Network error: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_items();
    });

    view! {
        <PageFrame page_id="a002_invoice--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Invoices"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load_items()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 700px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Number"</TableHeaderCell>
                                <TableHeaderCell>"Created"</TableHeaderCell>
                                <TableHeaderCell>"Order"</TableHeaderCell>
                                <TableHeaderCell>"Lines"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|item| item.id.0
                                children=move |item| {
                                    let item_id = item.id.as_string();
                                    let invoice_no_for_link = item.invoice_no.clone();
                                    let invoice_no_text = item.invoice_no.clone();
                                    let created = format_datetime(&item.created_at.to_rfc3339());
                                    let order_short = {
                                        let full = item.order_id.as_string();
                                        format!("{}...", &full[..8.min(full.len())])
                                    };

                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(item_id.clone(), invoice_no_for_link.clone());
                                                        }
                                                    >
                                                        {invoice_no_text}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout>
                                                    {created}
                                                </TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-family: monospace;">{order_short}</span>
                                                </TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-variant-numeric: tabular-nums;">
                                                        {item.lines.len()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-variant-numeric: tabular-nums;">
                                                        {format_currency(item.total_amount)}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
