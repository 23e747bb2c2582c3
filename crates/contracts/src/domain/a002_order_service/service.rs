/// Service handling order lifecycle
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderService;

impl OrderService {
    pub fn process_order(&self) -> String {
        "Processing order...".to_string()
    }

    pub fn cancel_order(&self) -> String {
        "Cancelling order...".to_string()
    }
}

pub fn process_order() -> String {
    OrderService.process_order()
}

pub fn cancel_order() -> String {
    OrderService.cancel_order()
}
