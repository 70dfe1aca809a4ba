use rust_decimal::Decimal;

pub struct Account {
    pub id: u32,
    pub holder: String,
    pub balance: Decimal,
}
