pub mod state;

use self::state::create_state;
use crate::shared::api_utils::api_base;
use crate::shared::components::number_format::format_currency;
use crate::shared::date_utils::format_date;
use crate::shared::page_frame::PageFrame;
use crate::usecases::u601_generate_invoice::InvoiceGenerator;
use contracts::domain::a001_order::{Order, OrderId};
use gloo_net::http::Request;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn OrderList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Order currently open in the invoice generator, if any
    let generating_for = RwSignal::new(None::<OrderId>);

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let search = state.with_untracked(|s| s.search_query.clone());
            let mut url = format!(
                "{}/api/a001/order/list?_ts={}",
                api_base(),
                js_sys::Date::now() as i64
            );
            if !search.is_empty() {
                url.push_str(&format!("&search={}", urlencoding::encode(&search)));
            }

            let result = Request::get(&url)
                .header("Cache-Control", "no-cache, no-store, must-revalidate")
                .header("Pragma", "no-cache")
                .send()
                .await;
            match result {
                Ok(response) if response.ok() => match response.json::<Vec<Order>>().await {
                    Ok(items) => state.update(|s| {
                        s.items = items;
                        s.is_loaded = true;
                    }),
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

    // Tab pages are kept alive, so a reopened tab reuses the loaded list
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        } else {
            log!("Using cached order list");
        }
    });

    let search_query = RwSignal::new(state.get_untracked().search_query.clone());

    Effect::new(move || {
        let typed = search_query.get();
        untrack(move || state.update(|s| s.search_query = typed));
    });

    view! {
        <PageFrame page_id="a001_order--list" category="list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
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
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <div style="flex: 1; max-width: 320px;">
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Search:"</Label>
                            <Input
                                value=search_query
                                placeholder="Number, customer..."
                            />
                        </Flex>
                    </div>

                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_items()
                        disabled=Signal::derive(move || loading.get())
                    >
                        "Find"
                    </Button>
                </Flex>

                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Number"</TableHeaderCell>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <TableHeaderCell>"Lines"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|item| item.id.0
                                children=move |item| {
                                    let order_id = item.id;
                                    let formatted_date = format_date(&item.ordered_at);

                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.order_no.clone()}
                                                </TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout>
                                                    {formatted_date}
                                                </TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item.customer.clone()}
                                                </TableCellLayout>
                                            </TableCell>

                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-variant-numeric: tabular-nums;">
                                                        {item.line_count}
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

                                            <TableCell>
                                                <TableCellLayout>
                                                    <Button
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| generating_for.set(Some(order_id))
                                                    >
                                                        "Generate invoice"
                                                    </Button>
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

            {move || {
                generating_for.get().map(|order_id| view! {
                    <InvoiceGenerator
                        order_id=order_id
                        on_close=Callback::new(move |_| generating_for.set(None))
                    />
                })
            }}
        </PageFrame>
    }
}
