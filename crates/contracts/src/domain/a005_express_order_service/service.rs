use crate::domain::a002_order_service::OrderService;

/// Order service with an expedited path
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressOrderService {
    pub base: OrderService,
}

impl ExpressOrderService {
    pub fn expedite_order(&self) -> String {
        format!("{} Expedited.", self.base.process_order())
    }
}

pub fn expedite_order() -> String {
    ExpressOrderService::default().expedite_order()
}
