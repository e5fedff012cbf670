use field_rules::{Record, validate};

#[derive(Record)]
pub struct Address {
    #[validate(rules = "len:>,4")]
    pub street: String
}

#[derive(Record)]
pub struct Customer {
    pub billing: Address,
    pub shipping: Option<Box<Address>>
}

fn main() {
    let customer = Customer {
        billing:  Address {
            street: "Elm".into()
        },
        shipping: None
    };
    let result = validate(&customer);
    assert!(result.field_errors.contains("billing.street"));
}
