use super::api;
use super::state::{
    classify_fetch, EditBuffer, FetchOutcome, LineItemRow, PageState, NO_PRODUCTS_MESSAGE,
    PAGE_SIZE,
};
use super::submit::build_invoice_payload;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast_service::ToastService;
use crate::shared::components::number_format::format_currency;
use crate::shared::components::{DateInput, PaginationControls};
use crate::shared::modal::Modal;
use contracts::domain::a001_order::OrderId;
use contracts::domain::common::AggregateId;
use contracts::usecases::u601_generate_invoice::{
    CreateInvoiceRequest, LineItemDraft, LineItemQuery,
};
use leptos::children::ToChildren;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const DEFAULT_HEADER: &str = "Generate Invoice";

const SUCCESS_TITLE: &str = "Success";
const SUCCESS_MESSAGE: &str = "Invoice created successfully.";
const NO_DATES_TITLE: &str = "Oops!";
const NO_DATES_MESSAGE: &str = "It looks like there are no activation dates set. To proceed \
     with creating an invoice, kindly set at least one Invoice Date.";
const ERROR_TITLE: &str = "Error";

/// Modal panel that generates an invoice from an order's line items.
///
/// Pages through the lines five at a time; invoice-date edits accumulate
/// across pages and survive a failed save, so the user can fix the input
/// and retry without losing anything.
#[component]
pub fn InvoiceGenerator(
    /// Order whose line items are being invoiced
    order_id: OrderId,
    /// Panel title, overridable by the host
    #[prop(optional, into)]
    header: MaybeProp<String>,
    /// Fired when the panel should go away (Cancel, close icon, success)
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let toasts = use_context::<ToastService>().expect("ToastService not found");

    let title = header
        .get_untracked()
        .unwrap_or_else(|| DEFAULT_HEADER.to_string());

    let rows = RwSignal::new(None::<Vec<LineItemRow>>);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let page = RwSignal::new(PageState::new(PAGE_SIZE));
    let buffer = RwSignal::new(EditBuffer::default());

    // Parameter object for the page fetch. Stays None until the count
    // resolves, so a fetch can never run with an unknown window.
    let query = RwSignal::new(None::<LineItemQuery>);
    let fetch_seq = StoredValue::new(0u64);

    // Count fetch, once per mount; its continuation publishes the first query
    Effect::new(move || {
        spawn_local(async move {
            match api::count_line_items(order_id).await {
                Ok(count) => {
                    page.update(|p| p.apply_count(count));
                    if count > 0 {
                        query.set(Some(LineItemQuery {
                            order_id,
                            page_size: PAGE_SIZE,
                            page_offset: 0,
                        }));
                    } else {
                        rows.set(None);
                        error.set(Some(NO_PRODUCTS_MESSAGE.to_string()));
                        loading.set(false);
                    }
                }
                Err(e) => {
                    error.set(Some(e));
                    loading.set(false);
                }
            }
        });
    });

    // Every published query triggers exactly one fetch. A response that
    // lost the race to a newer query is dropped.
    Effect::new(move || {
        if let Some(q) = query.get() {
            let generation = fetch_seq.get_value() + 1;
            fetch_seq.set_value(generation);
            spawn_local(async move {
                let outcome = classify_fetch(api::fetch_line_items(&q).await);
                if fetch_seq.get_value() != generation {
                    return;
                }
                match outcome {
                    FetchOutcome::Rows(list) => {
                        error.set(None);
                        rows.set(Some(list));
                    }
                    FetchOutcome::NoProducts => {
                        rows.set(None);
                        error.set(Some(NO_PRODUCTS_MESSAGE.to_string()));
                    }
                    FetchOutcome::Failed(message) => {
                        rows.set(None);
                        error.set(Some(message));
                    }
                }
                loading.set(false);
            });
        }
    });

    // A refused move changes nothing and publishes nothing
    let publish_window = move || {
        loading.set(true);
        let p = page.get_untracked();
        query.set(Some(LineItemQuery {
            order_id,
            page_size: p.page_size,
            page_offset: p.page_offset,
        }));
    };

    let on_back = Callback::new(move |_| {
        if page.try_update(|p| p.back()).unwrap_or(false) {
            publish_window();
        }
    });
    let on_forward = Callback::new(move |_| {
        if page.try_update(|p| p.forward()).unwrap_or(false) {
            publish_window();
        }
    });

    let handle_save = move || {
        let drafts = buffer.with_untracked(|b| b.snapshot());
        match build_invoice_payload(&drafts, order_id) {
            None => {
                toasts.warning(NO_DATES_TITLE, NO_DATES_MESSAGE);
            }
            Some(order_items) => {
                spawn_local(async move {
                    match api::create_invoice(CreateInvoiceRequest { order_items }).await {
                        Ok(response) => {
                            toasts.success(SUCCESS_TITLE, SUCCESS_MESSAGE);
                            let invoice_id = response.invoice_id.as_string();
                            tabs_store.open_tab(
                                &format!("a002_invoice_detail_{}", invoice_id),
                                "Invoice",
                            );
                            on_close.run(());
                        }
                        Err(message) => {
                            toasts.error(ERROR_TITLE, message);
                        }
                    }
                });
            }
        }
    };

    let footer = ToChildren::to_children(move || {
        view! {
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="width: 100%;">
                <PaginationControls
                    label=Signal::derive(move || page.get().page_of())
                    can_back=Signal::derive(move || page.get().can_back())
                    can_forward=Signal::derive(move || page.get().can_forward())
                    on_back=on_back
                    on_forward=on_forward
                />
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_save()
                    >
                        "Save"
                    </Button>
                </Flex>
            </Flex>
        }
    });

    view! {
        <Modal title=title on_close=on_close footer=footer>
            <div class="invoice-generator">
                {move || {
                    if loading.get() {
                        return view! {
                            <Flex gap=FlexGap::Small style="align-items:center;padding:40px;justify-content:center;">
                                <Spinner />
                                <span>"Loading..."</span>
                            </Flex>
                        }
                        .into_any();
                    }
                    if let Some(message) = error.get() {
                        return view! {
                            <div class="alert alert--error">{message}</div>
                        }
                        .into_any();
                    }
                    match rows.get() {
                        Some(list) => view! {
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
                                    {list.into_iter().map(|row| {
                                        let row_id = row.id;
                                        let initial_date = row.invoice_date.clone().unwrap_or_default();
                                        // Buffered edit wins over the stored date, so a row
                                        // edited on a previous visit shows the edit again
                                        let date_value = Signal::derive(move || {
                                            buffer
                                                .with(|b| b.date_for(row_id))
                                                .unwrap_or_else(|| initial_date.clone())
                                        });
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {row.product_name.clone()}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <DateInput
                                                            value=date_value
                                                            on_change=move |value: String| {
                                                                buffer.update(|b| {
                                                                    b.record(vec![LineItemDraft {
                                                                        id: row_id,
                                                                        invoice_date: Some(value),
                                                                        order_id: None,
                                                                    }]);
                                                                });
                                                            }
                                                        />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span style="font-variant-numeric: tabular-nums;">
                                                            {format_currency(row.unit_price)}
                                                        </span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span style="font-variant-numeric: tabular-nums;">
                                                            {row.quantity}
                                                        </span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span style="font-variant-numeric: tabular-nums;">
                                                            {format_currency(row.total_price)}
                                                        </span>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                        }
                        .into_any(),
                        None => view! { <div></div> }.into_any(),
                    }
                }}
            </div>
        </Modal>
    }
}
