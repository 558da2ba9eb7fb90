use contracts::domain::a001_order::Order;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct OrderListState {
    pub items: Vec<Order>,
    pub search_query: String,
    pub is_loaded: bool,
}

impl Default for OrderListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_query: String::new(),
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}
