use field_rules::{Inspect, Record, validate};

#[derive(Record)]
pub struct Page<T>
where
    T: Inspect
{
    #[validate(rules = "required")]
    pub items: Vec<T>,

    pub cursor: Option<T>
}

#[derive(Record)]
pub struct Borrowed<'a> {
    #[validate(rules = "hasPrefix:id-")]
    pub id: &'a str
}

fn main() {
    let page: Page<String> = Page {
        items:  vec!["a".into()],
        cursor: None
    };
    assert!(validate(&page).is_ok());
    assert!(validate(&Borrowed {
        id: "id-1"
    })
    .is_ok());
}
