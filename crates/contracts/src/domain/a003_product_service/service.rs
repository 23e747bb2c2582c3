/// Service managing product inventory
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductService;

impl ProductService {
    pub fn manage_inventory(&self) -> String {
        "Managing inventory...".to_string()
    }
}

pub fn manage_inventory() -> String {
    ProductService.manage_inventory()
}
