use field_rules::{Record, validate};

#[derive(Record)]
#[validate(rename_all = "camelCase", crate = "field_rules_core")]
pub struct Profile {
    #[validate(rules = "required")]
    pub display_name: String,

    #[validate(rename = "site", rules = "url")]
    pub home_page: String,

    #[validate(skip)]
    pub cache: Vec<u8>
}

fn main() {
    let result = validate(&Profile {
        display_name: String::new(),
        home_page:    "cucu".into(),
        cache:        Vec::new()
    });
    assert!(result.field_errors.contains("displayName"));
    assert!(result.field_errors.contains("site"));
}
